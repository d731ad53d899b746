//! Pattern, guard and switch AST.

mod guard;
mod pattern;
mod switch;
mod ty;

pub use guard::{CompareOp, GuardExpr, Operand};
pub use pattern::{
    CasePattern, ElementPattern, Literal, PatternError, RestSpec, SequencePattern,
};
pub use switch::{Arm, BodyTemplate, Module, SwitchDecl, TemplateSegment};
pub use ty::SubjectType;
