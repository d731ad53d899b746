//! Command handlers for the `seqpat` CLI.
//!
//! Each submodule implements one command. Handlers print their results and
//! return a [`CliError`](crate::CliError) when the command fails; `main`
//! decides the exit code.

mod check;
mod debug;
mod explain;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::run_file;
