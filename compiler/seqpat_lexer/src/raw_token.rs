//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! string interning and final token conversion.

use logos::Logos;
use seqpat_ir::LexErrorKind;

/// Error payload for logos. Converted to [`LexErrorKind`] when the error
/// token is pushed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum RawError {
    #[default]
    InvalidCharacter,
    IntegerOverflow,
}

impl From<RawError> for LexErrorKind {
    fn from(err: RawError) -> Self {
        match err {
            RawError::InvalidCharacter => LexErrorKind::InvalidCharacter,
            RawError::IntegerOverflow => LexErrorKind::IntegerOverflow,
        }
    }
}

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("if")]
    If,
    #[token("null")]
    Null,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("_", priority = 3)]
    Underscore,

    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,
    #[token("|")]
    Pipe,
    #[token("=>")]
    FatArrow,
    #[token("...")]
    Ellipsis,
    #[token("-")]
    Minus,

    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,

    // Integer (sign handled by the parser)
    #[regex(r"[0-9]+", |lex| {
        lex.slice().parse::<u64>().map_err(|_| RawError::IntegerOverflow)
    })]
    Int(u64),

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    // String literal missing its closing quote before end of line
    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    UnterminatedString,

    // Char literal; the single-character rule is checked on conversion
    #[regex(r"'([^'\\\n\r]|\\.)*'")]
    Char,

    // Identifier
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
