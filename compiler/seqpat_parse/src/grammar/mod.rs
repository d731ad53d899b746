//! Grammar rules, one module per construct.

mod guard;
mod literal;
mod pattern;
mod switch;
mod template;
mod ty;
mod value;
