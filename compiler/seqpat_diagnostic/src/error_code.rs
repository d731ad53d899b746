//! Error codes.
//!
//! A code is `E` plus four digits; the first digit names the phase that
//! reports it. Codes are stable so they can be searched for and passed to
//! `seqpat explain`.

use std::fmt;

/// The phase a code belongs to.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Phase {
    Lexer,
    Parser,
    Pattern,
    Eval,
    Internal,
}

macro_rules! error_codes {
    ($($phase:ident { $($(#[doc = $doc:literal])* $code:ident,)* })*) => {
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum ErrorCode {
            $($($(#[doc = $doc])* $code,)*)*
        }

        impl ErrorCode {
            /// Every code, in numeric order.
            pub const ALL: &'static [ErrorCode] = &[$($(ErrorCode::$code,)*)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($(ErrorCode::$code => stringify!($code),)*)*
                }
            }

            pub fn phase(self) -> Phase {
                match self {
                    $($(ErrorCode::$code => Phase::$phase,)*)*
                }
            }
        }
    };
}

error_codes! {
    Lexer {
        /// Unterminated string literal
        E0001,
        /// Invalid character in source
        E0002,
        /// Integer literal out of range
        E0003,
        /// Invalid character literal
        E0004,
        /// Invalid escape sequence
        E0005,
    }
    Parser {
        /// Unexpected token
        E1001,
        /// Expected pattern
        E1002,
        /// Unclosed delimiter
        E1003,
        /// Expected identifier
        E1004,
        /// Expected type
        E1005,
        /// Invalid body template
        E1006,
        /// Invalid subject value
        E1007,
        /// Nesting too deep
        E1008,
    }
    Pattern {
        /// More than one rest marker in a sequence pattern
        E3001,
        /// Non-exhaustive switch
        E3002,
        /// Unreachable case clause (warning)
        E3003,
        /// Binding name used twice in one pattern
        E3004,
        /// Trailing elements without a rest marker
        E3005,
        /// Alternatives bind different names
        E3006,
        /// Guard or body refers to an unknown binding
        E3007,
    }
    Eval {
        /// No case clause matched the subject
        E6001,
        /// Guard compared values of incompatible types
        E6002,
    }
    Internal {
        /// Internal error
        E9001,
    }
}

impl ErrorCode {
    /// Codes reported as warnings rather than errors.
    pub fn is_warning(self) -> bool {
        self == ErrorCode::E3003
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = String;

    /// Case-insensitive: `e3002` parses as `E3002`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown error code: {s}"))
    }
}

#[cfg(test)]
mod tests;
