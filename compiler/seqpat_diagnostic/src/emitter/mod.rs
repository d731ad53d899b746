//! Writing diagnostics out.
//!
//! [`TerminalEmitter`] renders snippets for people; [`JsonEmitter`] writes
//! one JSON array for editors and scripts. Write failures are ignored:
//! a broken pipe while reporting should not turn into a second error.

mod json;
mod terminal;

pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt;

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        diagnostics.iter().for_each(|diag| self.emit(diag));
    }

    fn flush(&mut self);

    /// Close the report with error and warning totals, if the format has a
    /// place for them.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Displays a string as a quoted JSON string literal.
pub(crate) struct JsonStr<'a>(pub &'a str);

impl fmt::Display for JsonStr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write;

        f.write_char('"')?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                c if c.is_control() => write!(f, "\\u{:04x}", u32::from(c))?,
                c => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}
