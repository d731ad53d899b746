//! Human-readable output in the familiar `error[CODE]: message` shape.
//!
//! With the source attached, each label prints as `path:line:col` followed
//! by the source line and an underline; without it, labels print their byte
//! range.

use std::io::Write;

use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// When to emit ANSI color codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode `{other}` (expected auto, always or never)"
            )),
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Error,
    Warning,
    Help,
    Secondary,
    Bold,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Help => "\x1b[1;32m",
            Style::Secondary => "\x1b[1;34m",
            Style::Bold => "\x1b[1m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

const RESET: &str = "\x1b[0m";

pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    /// `(path, text)` of the file the spans point into.
    source: Option<(String, String)>,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` decides coloring under [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.source = Some((path.into(), text.into()));
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn styled(&self, text: &str, style: Style) -> String {
        if self.colors {
            format!("{}{text}{RESET}", style.ansi())
        } else {
            text.to_string()
        }
    }

    fn label_lines(&self, label: &Label, severity: Severity) -> String {
        let marker = if label.is_primary { "-->" } else { ":::" };
        let style = if label.is_primary {
            Style::for_severity(severity)
        } else {
            Style::Secondary
        };
        let message = self.styled(&label.message, style);

        let Some((path, text)) = &self.source else {
            return format!("  {marker} {}: {message}\n", label.span);
        };

        let (line, col) = label.span.line_col(text);
        let line_text = text.lines().nth(line - 1).unwrap_or("");
        let gutter = line.to_string();
        let pad = " ".repeat(gutter.len());

        // The underline stops at the end of the first line.
        let available = line_text.chars().count().saturating_sub(col - 1).max(1);
        let width = label.span.to_range().len().clamp(1, available);
        let mark = if label.is_primary { "^" } else { "-" };
        let underline = self.styled(&mark.repeat(width), style);

        format!(
            "  {marker} {path}:{line}:{col}\n {pad} |\n {gutter} | {line_text}\n {pad} | {indent}{underline} {message}\n",
            indent = " ".repeat(col - 1),
        )
    }
}

/// `"1 warning"`, `"2 warnings"`.
fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let severity = diagnostic.severity;
        let mut out = format!(
            "{}{}: {}\n",
            self.styled(severity.as_str(), Style::for_severity(severity)),
            self.styled(&format!("[{}]", diagnostic.code), Style::Bold),
            diagnostic.message
        );
        for label in &diagnostic.labels {
            out.push_str(&self.label_lines(label, severity));
        }
        for note in &diagnostic.notes {
            out.push_str(&format!("  = {}: {note}\n", self.styled("note", Style::Bold)));
        }
        for suggestion in &diagnostic.suggestions {
            out.push_str(&format!(
                "  = {}: {suggestion}\n",
                self.styled("help", Style::Help)
            ));
        }
        out.push('\n');
        let _ = self.writer.write_all(out.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let line = match (error_count, warning_count) {
            (0, 0) => return,
            (0, warnings) => format!(
                "{}: {} emitted",
                self.styled("warning", Style::Warning),
                count(warnings, "warning")
            ),
            (errors, warnings) => {
                let cause = if errors == 1 {
                    "previous error".to_string()
                } else {
                    format!("{errors} previous errors")
                };
                let tail = if warnings > 0 {
                    format!("; {} emitted", count(warnings, "warning"))
                } else {
                    String::new()
                };
                format!(
                    "{}: aborting due to {cause}{tail}",
                    self.styled("error", Style::Error)
                )
            }
        };
        let _ = writeln!(self.writer, "{line}");
    }
}
