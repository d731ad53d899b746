//! Diagnostic system for rich error reporting.
//!
//! Every phase reports problems the same way:
//! - Error codes for searchability (`seqpat explain E3002`)
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Context labels (why it's wrong)
//! - Suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::{ErrorCode, Phase};
pub use errors::ErrorDocs;
