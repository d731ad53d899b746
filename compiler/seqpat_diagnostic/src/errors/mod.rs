//! Long-form error documentation, shown by `seqpat explain <code>`.
//!
//! Each code has an `EXXXX.md` file next to this module, embedded at compile
//! time. A new code needs its file and an entry in the `docs!` list below.

use crate::ErrorCode;

macro_rules! docs {
    ($($code:ident),* $(,)?) => {
        static DOCS: &[(ErrorCode, &str)] = &[
            $((ErrorCode::$code, include_str!(concat!(stringify!($code), ".md"))),)*
        ];
    };
}

docs![
    // Lexer
    E0001, E0002, E0003, E0004, E0005,
    // Parser
    E1001, E1002, E1003, E1004, E1005, E1006, E1007, E1008,
    // Patterns
    E3001, E3002, E3003, E3004, E3005, E3006, E3007,
    // Evaluation
    E6001, E6002,
    // Internal
    E9001,
];

/// Lookup for the embedded markdown.
pub struct ErrorDocs;

impl ErrorDocs {
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter()
            .find_map(|&(documented, doc)| (documented == code).then_some(doc))
    }

    pub fn all_codes() -> impl Iterator<Item = ErrorCode> {
        DOCS.iter().map(|&(code, _)| code)
    }

    pub fn has_docs(code: ErrorCode) -> bool {
        Self::get(code).is_some()
    }
}
