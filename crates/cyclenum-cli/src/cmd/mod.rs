//! Command modules for the `cyclenum` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the built graph and parsed flags, writes its report to
//! stdout, and returns `Ok(())` on success or a [`crate::error::CliError`]
//! on failure.
pub mod count;
pub mod inspect;
pub mod list;
pub mod sweep;
pub mod verify;
