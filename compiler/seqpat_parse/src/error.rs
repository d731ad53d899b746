//! Parse error types.
//!
//! Covers syntax errors (`E1xxx`), lexical problems surfaced through error
//! tokens (`E0xxx`) and the pattern-level static checks performed while
//! parsing (`E3xxx`).

use seqpat_diagnostic::{Diagnostic, ErrorCode};
use seqpat_ir::{LexErrorKind, PatternError, Span, StringInterner, TokenKind};

/// Structured parse error kinds with contextual data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    // === Lexical ===
    /// The lexer produced an error token here.
    Lex(LexErrorKind),
    /// Integer literal outside the `i64` range after applying its sign.
    IntegerOutOfRange,

    // === Syntax ===
    /// Expected a specific token, found something else.
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },
    /// Expected a pattern (`_`, a name, a literal, `null`, `[...]`).
    ExpectedPattern { found: TokenKind },
    /// Reached end of input inside a delimiter.
    UnclosedDelimiter { open: TokenKind, open_span: Span },
    /// Expected an identifier.
    ExpectedIdentifier {
        found: TokenKind,
        /// What the identifier names: "switch name", "rest capture", ...
        context: &'static str,
    },
    /// Expected a subject type.
    ExpectedType { found: TokenKind },
    /// Malformed body template.
    InvalidTemplate { reason: &'static str },
    /// Expected a subject value.
    ExpectedValue { found: TokenKind },
    /// Brackets, parentheses or `!` nested past the parser's limit.
    NestingTooDeep { limit: usize },

    // === Pattern checks ===
    /// A second rest marker in the same sequence pattern.
    MultipleRestMarkers { first: Span },
    /// Suffix elements without a rest marker.
    SuffixWithoutRest,
    /// A name bound twice in one pattern.
    DuplicateBindingName { name: &'static str, first: Span },
    /// Alternatives of one case bind different names.
    InconsistentAlternativeBindings {
        name: &'static str,
        /// Where the name is bound in the alternative that has it.
        bound_at: Span,
    },
    /// Guard or body refers to a name the patterns do not bind.
    UnknownBinding { name: &'static str },
}

impl ParseErrorKind {
    /// Convert a structural violation reported by the pattern builder.
    pub fn from_pattern_error(err: &PatternError, interner: &StringInterner) -> (Self, Span) {
        match *err {
            PatternError::SuffixWithoutRest { span } => (ParseErrorKind::SuffixWithoutRest, span),
            PatternError::DuplicateBinding {
                name,
                first,
                second,
            } => (
                ParseErrorKind::DuplicateBindingName {
                    name: interner.lookup(name),
                    first,
                },
                second,
            ),
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::Lex(kind) => match kind {
                LexErrorKind::UnterminatedString => ErrorCode::E0001,
                LexErrorKind::InvalidCharacter => ErrorCode::E0002,
                LexErrorKind::IntegerOverflow => ErrorCode::E0003,
                LexErrorKind::InvalidChar => ErrorCode::E0004,
                LexErrorKind::InvalidEscape => ErrorCode::E0005,
            },
            ParseErrorKind::IntegerOutOfRange => ErrorCode::E0003,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedPattern { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
            ParseErrorKind::ExpectedType { .. } => ErrorCode::E1005,
            ParseErrorKind::InvalidTemplate { .. } => ErrorCode::E1006,
            ParseErrorKind::ExpectedValue { .. } => ErrorCode::E1007,
            ParseErrorKind::NestingTooDeep { .. } => ErrorCode::E1008,
            ParseErrorKind::MultipleRestMarkers { .. } => ErrorCode::E3001,
            ParseErrorKind::DuplicateBindingName { .. } => ErrorCode::E3004,
            ParseErrorKind::SuffixWithoutRest => ErrorCode::E3005,
            ParseErrorKind::InconsistentAlternativeBindings { .. } => ErrorCode::E3006,
            ParseErrorKind::UnknownBinding { .. } => ErrorCode::E3007,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParseErrorKind::Lex(kind) => match kind {
                LexErrorKind::InvalidCharacter => "invalid character".to_string(),
                LexErrorKind::UnterminatedString => "unterminated string literal".to_string(),
                LexErrorKind::InvalidChar => {
                    "character literal must hold exactly one character".to_string()
                }
                LexErrorKind::IntegerOverflow => "integer literal is too large".to_string(),
                LexErrorKind::InvalidEscape => "invalid escape sequence".to_string(),
            },
            ParseErrorKind::IntegerOutOfRange => {
                "integer literal does not fit in a 64-bit signed integer".to_string()
            }
            ParseErrorKind::UnexpectedToken { found, expected } => {
                format!("expected {expected}, found {}", found.display_name())
            }
            ParseErrorKind::ExpectedPattern { found } => {
                format!("expected a pattern, found {}", found.display_name())
            }
            ParseErrorKind::UnclosedDelimiter { open, .. } => {
                format!("unclosed delimiter `{}`", open.display_name())
            }
            ParseErrorKind::ExpectedIdentifier { found, context } => {
                format!("expected {context}, found {}", found.display_name())
            }
            ParseErrorKind::ExpectedType { found } => {
                format!("expected a type, found {}", found.display_name())
            }
            ParseErrorKind::InvalidTemplate { reason } => {
                format!("invalid body template: {reason}")
            }
            ParseErrorKind::ExpectedValue { found } => {
                format!("expected a value, found {}", found.display_name())
            }
            ParseErrorKind::NestingTooDeep { limit } => {
                format!("nesting exceeds the limit of {limit} levels")
            }
            ParseErrorKind::MultipleRestMarkers { .. } => {
                "a sequence pattern can contain at most one rest marker".to_string()
            }
            ParseErrorKind::SuffixWithoutRest => {
                "trailing elements require a rest marker".to_string()
            }
            ParseErrorKind::DuplicateBindingName { name, .. } => {
                format!("`{name}` is bound more than once in the same pattern")
            }
            ParseErrorKind::InconsistentAlternativeBindings { name, .. } => {
                format!("`{name}` is not bound in all alternatives")
            }
            ParseErrorKind::UnknownBinding { name } => {
                format!("cannot find binding `{name}` in this case")
            }
        }
    }

    /// Label text for the primary span.
    fn label(&self) -> &'static str {
        match self {
            ParseErrorKind::Lex(_) | ParseErrorKind::IntegerOutOfRange => "invalid literal",
            ParseErrorKind::UnexpectedToken { .. } => "unexpected token",
            ParseErrorKind::ExpectedPattern { .. } => "expected pattern",
            ParseErrorKind::UnclosedDelimiter { .. } => "input ends here",
            ParseErrorKind::ExpectedIdentifier { .. } => "expected identifier",
            ParseErrorKind::ExpectedType { .. } => "expected type",
            ParseErrorKind::InvalidTemplate { .. } => "in this template",
            ParseErrorKind::ExpectedValue { .. } => "expected value",
            ParseErrorKind::NestingTooDeep { .. } => "nested too deeply",
            ParseErrorKind::MultipleRestMarkers { .. } => "second rest marker",
            ParseErrorKind::SuffixWithoutRest => "element after the prefix",
            ParseErrorKind::DuplicateBindingName { .. } => "bound again here",
            ParseErrorKind::InconsistentAlternativeBindings { .. } => {
                "this alternative does not bind it"
            }
            ParseErrorKind::UnknownBinding { .. } => "not bound by the case pattern",
        }
    }

    /// Actionable hint, if there is one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ParseErrorKind::MultipleRestMarkers { .. } => {
                Some("keep a single `...` and match the remaining positions as prefix or suffix")
            }
            ParseErrorKind::SuffixWithoutRest => {
                Some("add a rest marker (`...` or `...name`) before the trailing elements")
            }
            ParseErrorKind::DuplicateBindingName { .. } => {
                Some("use a different name, and compare the two with a guard if they must be equal")
            }
            ParseErrorKind::InconsistentAlternativeBindings { .. } => {
                Some("bind the same names in every alternative, or split them into separate cases")
            }
            ParseErrorKind::InvalidTemplate { .. } => {
                Some("write `{name}` to interpolate a binding and `{{` or `}}` for literal braces")
            }
            ParseErrorKind::NestingTooDeep { .. } => {
                Some("flatten the structure, or split a long guard into separate cases")
            }
            ParseErrorKind::ExpectedType { .. } => {
                Some("subject types are `int`, `bool`, `char`, `str`, `any`, `[T]` and `T?`")
            }
            _ => None,
        }
    }
}

/// Parse error with its primary location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    /// Convert to a full Diagnostic for rich error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.message())
            .with_label(self.span, self.kind.label());

        match &self.kind {
            ParseErrorKind::UnclosedDelimiter { open, open_span } => {
                diag = diag.with_secondary_label(
                    *open_span,
                    format!("`{}` opened here", open.display_name()),
                );
            }
            ParseErrorKind::MultipleRestMarkers { first } => {
                diag = diag.with_secondary_label(*first, "first rest marker");
            }
            ParseErrorKind::DuplicateBindingName { first, .. } => {
                diag = diag.with_secondary_label(*first, "first bound here");
            }
            ParseErrorKind::InconsistentAlternativeBindings { bound_at, .. } => {
                diag = diag.with_secondary_label(*bound_at, "bound here");
            }
            _ => {}
        }

        if let Some(hint) = self.kind.hint() {
            diag = diag.with_suggestion(hint);
        }
        diag
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.kind.message(), self.span)
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests;
