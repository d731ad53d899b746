//! Runtime side of seqpat: the sequence matcher and the case selector.
//!
//! - [`match_sequence`] decides whether one pattern matches one subject and
//!   returns its [`Bindings`].
//! - [`CaseSelector`] holds a switch's clauses in declaration order and
//!   picks the first one whose pattern matches and whose guard holds.
//! - [`render`] interpolates bindings into a body template.
//!
//! Both work on any [`Element`] type; [`Value`](seqpat_ir::Value) and `i64`
//! are provided.

mod bindings;
mod element;
mod error;
mod guard;
mod matcher;
mod render;
mod selector;

pub use bindings::{Bindings, Matched};
pub use element::Element;
pub use error::EvalError;
pub use guard::{Guard, GuardFn};
pub use matcher::{match_case, match_sequence};
pub use render::render;
pub use selector::{CaseSelector, CaseSelectorBuilder, Selection};
