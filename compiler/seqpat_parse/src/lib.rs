//! Recursive descent parser for the seqpat switch language.
//!
//! Entry points:
//! - [`parse`]: a whole source file of `switch` declarations, with error
//!   recovery at case-clause granularity.
//! - [`parse_sequence_pattern`] / [`parse_case_pattern`]: a single pattern.
//! - [`parse_value`]: a subject value such as `[1, [2, 3], null]`.
//!
//! The structural pattern invariants (one rest marker, suffix only with a
//! rest marker, unique binding names) and the clause-level name checks
//! (alternatives agree, guards and bodies only use bound names) are all
//! enforced here, so every AST the parser returns is well formed.
//!
//! Brackets, guard parentheses and `!` may nest at most [`MAX_NESTING`]
//! levels deep. Deeper input is rejected with `E1008`, which keeps every
//! later recursive pass over the tree bounded.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use seqpat_ir::{
    CasePattern, Module, SequencePattern, StringInterner, TokenKind, TokenList, Value,
};
use seqpat_stack::ensure_sufficient_stack;

/// Deepest nesting of brackets, guard parentheses and `!` the parser accepts.
pub const MAX_NESTING: usize = 256;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Errors recorded while recovering; fatal errors are returned instead.
    errors: Vec<ParseError>,
    /// Nesting levels currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            errors: Vec::new(),
            depth: 0,
        }
    }

    /// Run `parse` one nesting level deeper.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= MAX_NESTING {
            return Err(self.cursor.error_here(ParseErrorKind::NestingTooDeep {
                limit: MAX_NESTING,
            }));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| parse(self));
        self.depth -= 1;
        result
    }

    /// Run `parse` and require that it consumed all input.
    fn parse_complete<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let value = parse(self)?;
        if self.cursor.is_at_end() {
            Ok(value)
        } else {
            Err(self.cursor.unexpected("end of input"))
        }
    }
}

/// Result of parsing a source file.
#[derive(Debug, Default)]
pub struct ParseOutput {
    /// Switches that parsed and passed the clause checks.
    pub module: Module,
    /// Every error found, in source order.
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parse a source file.
///
/// Lexer errors are reported once each, up front. A switch containing any
/// error is left out of the returned module.
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> ParseOutput {
    let mut parser = Parser::new(tokens, interner);
    let module = parser.parse_module();

    let mut errors: Vec<ParseError> = tokens
        .errors()
        .map(|(kind, span)| ParseError::new(ParseErrorKind::Lex(kind), span))
        .collect();
    errors.extend(
        parser
            .errors
            .into_iter()
            .filter(|e| !matches!(e.kind, ParseErrorKind::Lex(_))),
    );
    errors.sort_by_key(|e| (e.span.start, e.span.end));

    ParseOutput { module, errors }
}

/// Parse a single sequence pattern, e.g. `[first, ...middle, last]`.
pub fn parse_sequence_pattern(
    tokens: &TokenList,
    interner: &StringInterner,
) -> Result<SequencePattern, ParseError> {
    Parser::new(tokens, interner).parse_complete(Parser::parse_sequence_pattern)
}

/// Parse a single case pattern: `null`, `_`, a name, or a sequence pattern.
pub fn parse_case_pattern(
    tokens: &TokenList,
    interner: &StringInterner,
) -> Result<CasePattern, ParseError> {
    Parser::new(tokens, interner).parse_complete(Parser::parse_case_pattern)
}

/// Parse a subject value.
pub fn parse_value(tokens: &TokenList, interner: &StringInterner) -> Result<Value, ParseError> {
    Parser::new(tokens, interner).parse_complete(Parser::parse_value)
}

/// Tokens that can start a top-level item; used for recovery.
const ITEM_START: &[TokenKind] = &[TokenKind::Switch];
