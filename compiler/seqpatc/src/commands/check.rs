//! The `check` command: parse a file and run the pattern checks.

use crate::report::emit_diagnostics;
use crate::{CliError, Options, OutputFormat, Session};

/// Check every switch in `path`.
///
/// All diagnostics are reported before deciding the outcome, so one run
/// shows every problem in the file. Unreachable clauses only fail the check
/// under `--deny-warnings`.
pub fn check_file(path: &str, options: Options) -> Result<(), CliError> {
    let session = Session::load(path)?;
    let diagnostics = session.diagnostics(options.deny_warnings);
    emit_diagnostics(&session, &diagnostics, options);

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        return Err(CliError::Rejected {
            path: path.to_string(),
            errors,
        });
    }

    if options.format == OutputFormat::Text {
        let count = session.module().switches.len();
        let noun = if count == 1 { "switch" } else { "switches" };
        println!("OK: {path} ({count} {noun})");
    }
    Ok(())
}
