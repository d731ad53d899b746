//! Token types produced by the lexer and consumed by the parser.

use super::{Name, Span};
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Why the lexer produced an error token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LexErrorKind {
    /// Character that starts no token.
    InvalidCharacter,
    /// String literal without a closing `"`.
    UnterminatedString,
    /// Char literal that is unclosed or holds more than one character.
    InvalidChar,
    /// Integer literal that does not fit in 64 bits.
    IntegerOverflow,
    /// Unknown escape sequence inside a string or char literal.
    InvalidEscape,
}

/// Token kinds of the switch language.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal (negation folded in the parser)
    Int(u64),
    /// String literal (interned, escapes already processed)
    Str(Name),
    /// Char literal: 'a', '\n'
    Char(char),
    /// Identifier (interned)
    Ident(Name),

    Switch,
    Case,
    If,
    Null,
    True,
    False,
    /// `_`
    Underscore,

    LBracket,
    RBracket,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Question,
    Pipe,
    /// `=>`
    FatArrow,
    /// `...` (the rest marker)
    Ellipsis,
    Minus,

    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    AndAnd,
    OrOr,
    Bang,

    Error(LexErrorKind),
    Eof,
}

impl TokenKind {
    /// Human-readable name for "expected X, found Y" messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::Str(_) => "string",
            TokenKind::Char(_) => "char",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Switch => "switch",
            TokenKind::Case => "case",
            TokenKind::If => "if",
            TokenKind::Null => "null",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Underscore => "_",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Pipe => "|",
            TokenKind::FatArrow => "=>",
            TokenKind::Ellipsis => "...",
            TokenKind::Minus => "-",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::AndAnd => "&&",
            TokenKind::OrOr => "||",
            TokenKind::Bang => "!",
            TokenKind::Error(_) => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }

    /// Check discriminant equality, ignoring payloads.
    ///
    /// `check(&TokenKind::Ident(Name::EMPTY))` matches any identifier.
    #[inline]
    pub fn same_kind(&self, other: &TokenKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Str(name) => write!(f, "Str({name:?})"),
            TokenKind::Char(c) => write!(f, "Char({c:?})"),
            TokenKind::Ident(name) => write!(f, "Ident({name:?})"),
            TokenKind::Error(kind) => write!(f, "Error({kind:?})"),
            other => write!(f, "`{}`", other.display_name()),
        }
    }
}

/// Lexer output: every token of a source file, terminated by `Eof`.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Error tokens, in source order.
    pub fn errors(&self) -> impl Iterator<Item = (LexErrorKind, Span)> + '_ {
        self.tokens.iter().filter_map(|t| match t.kind {
            TokenKind::Error(kind) => Some((kind, t.span)),
            _ => None,
        })
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
