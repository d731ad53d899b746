//! Writing diagnostics in the format the user asked for.

use std::io::Write;

use seqpat_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use seqpat_diagnostic::Diagnostic;

use crate::{OutputFormat, Options, Session};

/// Write `diagnostics` for `session` to `writer` and hand the writer back.
///
/// Text output carries source snippets and a closing summary line; JSON
/// output is a single array, empty when there is nothing to report.
pub fn write_diagnostics<W: Write>(
    writer: W,
    session: &Session,
    diagnostics: &[Diagnostic],
    options: Options,
    is_tty: bool,
) -> W {
    match options.format {
        OutputFormat::Text => {
            let mut emitter = TerminalEmitter::with_color_mode(writer, options.color, is_tty)
                .with_source(session.path(), session.source());
            emitter.emit_all(diagnostics);
            let errors = diagnostics.iter().filter(|d| d.is_error()).count();
            let warnings = diagnostics.iter().filter(|d| d.is_warning()).count();
            emitter.emit_summary(errors, warnings);
            emitter.flush();
            emitter.into_inner()
        }
        OutputFormat::Json => {
            let mut emitter = JsonEmitter::new(writer).with_source(session.source());
            emitter.begin();
            emitter.emit_all(diagnostics);
            emitter.end();
            emitter.flush();
            emitter.into_inner()
        }
    }
}

/// Report to the process streams: text on stderr, JSON on stdout.
pub(crate) fn emit_diagnostics(session: &Session, diagnostics: &[Diagnostic], options: Options) {
    match options.format {
        OutputFormat::Text => {
            if diagnostics.is_empty() {
                return;
            }
            let is_tty = std::io::IsTerminal::is_terminal(&std::io::stderr());
            write_diagnostics(std::io::stderr(), session, diagnostics, options, is_tty);
        }
        OutputFormat::Json => {
            write_diagnostics(std::io::stdout(), session, diagnostics, options, false);
        }
    }
}
