//! The `run` command: evaluate one switch against subjects given on the
//! command line.

use tracing::warn;

use crate::report::emit_diagnostics;
use crate::{CliError, Options, Session};

/// Evaluate switch `name` in `path` for each subject and print the selected
/// bodies, one per line, in argument order.
///
/// A file with errors is not run. Subjects are evaluated in parallel; a
/// runtime error for one subject is reported without hiding the others.
pub fn run_file(
    path: &str,
    name: &str,
    subjects: &[String],
    options: Options,
) -> Result<(), CliError> {
    let session = Session::load(path)?;
    let diagnostics = session.diagnostics(options.deny_warnings);
    if !diagnostics.is_empty() {
        emit_diagnostics(&session, &diagnostics, options);
    }
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        return Err(CliError::Rejected {
            path: path.to_string(),
            errors,
        });
    }

    let results = session.run(name, subjects)?;

    let mut first_error = None;
    for (input, result) in subjects.iter().zip(results) {
        match result {
            Ok(body) => println!("{body}"),
            Err(err) => {
                warn!(subject = %input, error = %err, "evaluation failed");
                emit_diagnostics(&session, &[err.to_diagnostic()], options);
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}
