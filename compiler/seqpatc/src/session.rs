//! One source file run through the pipeline: lex, parse, check.

use rayon::prelude::*;
use seqpat_canon::{check_module, PatternProblem};
use seqpat_diagnostic::Diagnostic;
use seqpat_eval::{CaseSelector, EvalError};
use seqpat_ir::{BodyTemplate, Module, SharedInterner, SwitchDecl, TokenList, Value};
use seqpat_parse::ParseOutput;
use tracing::{debug, info};

use crate::CliError;

/// The result of every static phase over one file.
///
/// Switches with parse errors are already dropped from the module, so the
/// pattern checks run on whatever parsed cleanly.
pub struct Session {
    path: String,
    source: String,
    interner: SharedInterner,
    tokens: TokenList,
    parsed: ParseOutput,
    problems: Vec<PatternProblem>,
}

impl Session {
    pub fn new(path: impl Into<String>, source: impl Into<String>) -> Self {
        let path = path.into();
        let source = source.into();
        let interner = SharedInterner::new();
        let tokens = seqpat_lexer::lex(&source, &interner);
        let parsed = seqpat_parse::parse(&tokens, &interner);
        let problems = check_module(&parsed.module, &interner);
        debug!(
            path = %path,
            tokens = tokens.len(),
            switches = parsed.module.switches.len(),
            parse_errors = parsed.errors.len(),
            problems = problems.len(),
            "session ready"
        );
        Session {
            path,
            source,
            interner,
            tokens,
            parsed,
            problems,
        }
    }

    /// Read `path` from disk and run the static phases over it.
    pub fn load(path: &str) -> Result<Self, CliError> {
        let source = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(Session::new(path, source))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    pub fn module(&self) -> &Module {
        &self.parsed.module
    }

    pub fn parsed(&self) -> &ParseOutput {
        &self.parsed
    }

    pub fn problems(&self) -> &[PatternProblem] {
        &self.problems
    }

    /// Every diagnostic, parse errors first, then pattern problems.
    pub fn diagnostics(&self, deny_warnings: bool) -> Vec<Diagnostic> {
        let parse = self.parsed.errors.iter().map(seqpat_parse::ParseError::to_diagnostic);
        let problems = self.problems.iter().map(PatternProblem::to_diagnostic);
        parse
            .chain(problems)
            .map(|diag| if deny_warnings { diag.denied() } else { diag })
            .collect()
    }

    pub fn error_count(&self, deny_warnings: bool) -> usize {
        self.diagnostics(deny_warnings)
            .iter()
            .filter(|d| d.is_error())
            .count()
    }

    pub fn find_switch(&self, name: &str) -> Option<&SwitchDecl> {
        self.parsed
            .module
            .switches
            .iter()
            .find(|s| self.interner.lookup(s.name) == name)
    }

    pub fn selector(&self, name: &str) -> Result<CaseSelector<Value, BodyTemplate>, CliError> {
        let switch = self
            .find_switch(name)
            .ok_or_else(|| CliError::UnknownSwitch(name.to_string()))?;
        Ok(CaseSelector::from_switch(switch, self.interner.clone()))
    }

    /// Parse a subject literal such as `[0, 1]` or `null`.
    pub fn parse_subject(&self, input: &str) -> Result<Value, CliError> {
        let tokens = seqpat_lexer::lex(input, &self.interner);
        seqpat_parse::parse_value(&tokens, &self.interner).map_err(|err| {
            CliError::InvalidSubject {
                input: input.to_string(),
                message: err.to_string(),
            }
        })
    }

    /// Evaluate switch `name` for every subject, in parallel.
    ///
    /// Results come back in the order of `subjects`. A subject that fails
    /// to parse fails the whole call before anything is evaluated.
    pub fn run<S: AsRef<str>>(
        &self,
        name: &str,
        subjects: &[S],
    ) -> Result<Vec<Result<String, EvalError>>, CliError> {
        let selector = self.selector(name)?;
        let values = subjects
            .iter()
            .map(|input| self.parse_subject(input.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        info!(switch = name, subjects = values.len(), "evaluating");
        Ok(values.par_iter().map(|value| selector.run(value)).collect())
    }
}
