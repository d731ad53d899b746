//! JSON output: one array per run, one object per diagnostic.
//!
//! ```text
//! [
//!   {
//!     "code": "E3002",
//!     "severity": "error",
//!     "message": "...",
//!     "labels": [{"start": 7, "end": 10, "line": 1, "column": 8, "message": "...", "primary": true}],
//!     "notes": [],
//!     "suggestions": []
//!   }
//! ]
//! ```
//!
//! `line` and `column` appear only when the source text is attached.

use std::fmt::Write as _;
use std::io::Write;

use crate::{Diagnostic, Label};

use super::{DiagnosticEmitter, JsonStr};

pub struct JsonEmitter<W: Write> {
    writer: W,
    emitted: usize,
    source: Option<String>,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            emitted: 0,
            source: None,
        }
    }

    /// Attach the source so labels carry `line` and `column`.
    #[must_use]
    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source = Some(text.into());
        self
    }

    /// Open the array. Call once before the first `emit`.
    pub fn begin(&mut self) {
        let _ = self.writer.write_all(b"[\n");
    }

    /// Close the array.
    pub fn end(&mut self) {
        let _ = self.writer.write_all(b"\n]\n");
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn label_object(&self, label: &Label) -> String {
        let mut out = format!(
            "{{\"start\": {}, \"end\": {}, ",
            label.span.start, label.span.end
        );
        if let Some(source) = &self.source {
            let (line, column) = label.span.line_col(source);
            let _ = write!(out, "\"line\": {line}, \"column\": {column}, ");
        }
        let _ = write!(
            out,
            "\"message\": {}, \"primary\": {}}}",
            JsonStr(&label.message),
            label.is_primary
        );
        out
    }
}

fn string_array(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|s| JsonStr(s).to_string()).collect();
    format!("[{}]", items.join(", "))
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let labels: Vec<String> = diagnostic
            .labels
            .iter()
            .map(|label| self.label_object(label))
            .collect();

        let mut object = String::new();
        if self.emitted > 0 {
            object.push_str(",\n");
        }
        let _ = write!(
            object,
            "  {{\n    \"code\": {},\n    \"severity\": {},\n    \"message\": {},\n",
            JsonStr(diagnostic.code.as_str()),
            JsonStr(diagnostic.severity.as_str()),
            JsonStr(&diagnostic.message),
        );
        let _ = write!(
            object,
            "    \"labels\": [{}],\n    \"notes\": {},\n    \"suggestions\": {}\n  }}",
            labels.join(", "),
            string_array(&diagnostic.notes),
            string_array(&diagnostic.suggestions),
        );

        let _ = self.writer.write_all(object.as_bytes());
        self.emitted += 1;
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize, _warning_count: usize) {}
}

#[cfg(test)]
mod tests;
