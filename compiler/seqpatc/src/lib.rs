//! seqpat driver
//!
//! Runs source files through the whole pipeline and reports the results.
//!
//! # Architecture
//!
//! ```text
//! source text
//!     │
//!     ▼
//! seqpat_lexer::lex ──► TokenList
//!     │
//!     ▼
//! seqpat_parse::parse ──► Module + ParseErrors
//!     │
//!     ▼
//! seqpat_canon::check_module ──► PatternProblems
//!     │
//!     ▼
//! seqpat_eval::CaseSelector ──► selected bodies
//! ```
//!
//! [`Session`] holds every static result for one file; the command handlers
//! in [`commands`] turn sessions into output.

pub mod commands;
mod error;
mod options;
mod report;
mod session;
mod tracing_setup;

pub use error::CliError;
pub use options::{Options, OutputFormat};
pub use report::write_diagnostics;
pub use session::Session;
pub use tracing_setup::init_tracing;
