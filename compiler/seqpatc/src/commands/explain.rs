//! The `explain` command: display documentation for error codes.

use seqpat_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Print the long-form documentation for `code_str` (e.g. `E3002`).
pub fn explain_error(code_str: &str) -> Result<(), CliError> {
    let code = code_str
        .parse::<ErrorCode>()
        .map_err(|_| CliError::UnknownErrorCode(code_str.to_string()))?;
    let doc = ErrorDocs::get(code).ok_or(CliError::NoDocs(code))?;
    println!("{doc}");
    Ok(())
}
