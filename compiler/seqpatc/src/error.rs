//! Driver errors: everything that stops a command before or after the
//! pipeline has reported its own diagnostics.

use seqpat_diagnostic::ErrorCode;
use seqpat_eval::EvalError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("no switch named `{0}`")]
    UnknownSwitch(String),

    #[error("invalid subject `{input}`: {message}")]
    InvalidSubject { input: String, message: String },

    #[error("unknown error code `{0}`")]
    UnknownErrorCode(String),

    #[error("no documentation available for {0}")]
    NoDocs(ErrorCode),

    #[error("`{path}` has {}", count_errors(.errors))]
    Rejected { path: String, errors: usize },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

#[expect(
    clippy::trivially_copy_pass_by_ref,
    reason = "thiserror passes fields by reference"
)]
fn count_errors(errors: &usize) -> String {
    if *errors == 1 {
        "1 error".to_string()
    } else {
        format!("{errors} errors")
    }
}

impl CliError {
    /// Process exit code: 2 for bad invocations, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            _ => 1,
        }
    }
}
