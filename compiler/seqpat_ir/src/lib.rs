//! Seqpat IR: shared data structures for the sequence-pattern engine.
//!
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - Pattern, guard and switch AST
//! - Runtime subject values
//!
//! Every AST type is `Clone + Eq + Hash + Debug` and immutable once built;
//! patterns are shared read-only across evaluating threads.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod interner;
mod name;
mod span;
mod token;
mod value;

pub use ast::{
    Arm, BodyTemplate, CasePattern, CompareOp, ElementPattern, GuardExpr, Literal, Module,
    Operand, PatternError, RestSpec, SequencePattern, SubjectType, SwitchDecl, TemplateSegment,
};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use span::Span;
pub use token::{LexErrorKind, Token, TokenKind, TokenList};
pub use value::{display_slice, Value};
