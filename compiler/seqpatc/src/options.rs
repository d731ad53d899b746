//! Command-line flags shared by every command.

use std::str::FromStr;

use seqpat_diagnostic::emitter::ColorMode;

use crate::CliError;

/// How diagnostics are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable, with source snippets, on stderr.
    #[default]
    Text,
    /// A JSON array on stdout.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("invalid format `{other}` (expected text or json)")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub color: ColorMode,
    pub format: OutputFormat,
    /// Treat unreachable-clause warnings as errors.
    pub deny_warnings: bool,
}

impl Options {
    /// Split `args` into flags and positional arguments.
    ///
    /// Flags may appear anywhere. Anything starting with `--` that is not a
    /// known flag is rejected; a single leading `-` is positional so that
    /// negative subjects like `-1` pass through.
    pub fn parse(args: &[String]) -> Result<(Options, Vec<String>), CliError> {
        let mut options = Options::default();
        let mut positional = Vec::new();

        for arg in args {
            if let Some(mode) = arg.strip_prefix("--color=") {
                options.color = mode.parse().map_err(CliError::Usage)?;
            } else if let Some(format) = arg.strip_prefix("--format=") {
                options.format = format.parse().map_err(CliError::Usage)?;
            } else if arg == "--deny-warnings" {
                options.deny_warnings = true;
            } else if arg.starts_with("--") {
                return Err(CliError::Usage(format!("unknown option `{arg}`")));
            } else {
                positional.push(arg.clone());
            }
        }

        Ok((options, positional))
    }
}
