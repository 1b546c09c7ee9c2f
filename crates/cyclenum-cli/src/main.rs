mod cli;
mod cmd;
mod error;
mod logging;
mod output;
mod source;

use clap::Parser;

use cli::{Cli, Command};
use cmd::count::CountOptions;
use cmd::list::ListOptions;
use error::CliError;
use source::build_graph;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    match run(&cli) {
        Ok(()) | Err(CliError::OutputClosed) => {}
        Err(e) => {
            eprintln!("{}", e.message());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let format = cli.format;
    let limit = cli.max_store_vertices;

    match &cli.command {
        Command::Count {
            graph,
            algorithm,
            origin,
            unique,
            canonical,
            require_cycles,
        } => {
            let graph = build_graph(graph)?;
            let opts = CountOptions {
                algorithm: *algorithm,
                origin: *origin,
                unique: *unique,
                canonical: (*canonical).into(),
                require_cycles: *require_cycles,
                max_store_vertices: limit,
            };
            cmd::count::run(&graph, &opts, format)
        }
        Command::List {
            graph,
            algorithm,
            origin,
            unique,
            canonical,
        } => {
            let graph = build_graph(graph)?;
            let opts = ListOptions {
                algorithm: *algorithm,
                origin: *origin,
                unique: *unique,
                canonical: (*canonical).into(),
                max_store_vertices: limit,
            };
            cmd::list::run(&graph, &opts, format)
        }
        Command::Inspect { graph } => {
            let graph = build_graph(graph)?;
            cmd::inspect::run(&graph, format)
        }
        Command::Verify { graph, canonical } => {
            let graph = build_graph(graph)?;
            cmd::verify::run(&graph, (*canonical).into(), limit, format)
        }
        Command::Sweep { max, algorithm } => cmd::sweep::run(*max, *algorithm, limit, format),
        Command::Version => {
            println!("{}", cyclenum_core::version());
            Ok(())
        }
    }
}
