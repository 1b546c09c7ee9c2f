//! Plain-text renderings of graphs and discovered cycles.
//!
//! The adapters borrow their data and implement [`Display`], so callers decide
//! where the text goes. The core never prints.

use std::fmt::{self, Display, Formatter};

use crate::cycles::Path;
use crate::graph::UndirectedGraph;

/// One line per vertex: `u -> v w ` (each neighbor followed by a space), in
/// vertex order and neighbor insertion order.
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyList<'a>(pub &'a UndirectedGraph);

impl Display for AdjacencyList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (vertex, neighbors) in self.0.adjacency().iter().enumerate() {
            write!(f, "{vertex} ->")?;
            if !neighbors.is_empty() {
                f.write_str(" ")?;
            }
            for n in neighbors {
                write!(f, "{n} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// One line per path, vertices separated by single spaces.
#[derive(Debug, Clone, Copy)]
pub struct PathList<'a>(pub &'a [Path]);

impl Display for PathList<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for path in self.0 {
            let mut vertices = path.iter();
            if let Some(first) = vertices.next() {
                write!(f, "{first}")?;
            }
            for v in vertices {
                write!(f, " {v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
