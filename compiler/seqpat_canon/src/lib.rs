//! Static checks for seqpat switches.
//!
//! Runs after parsing and before any clause is evaluated:
//!
//! - **Exhaustiveness**: every value of the declared subject type must reach
//!   some clause. Reported as an error with example missing patterns.
//! - **Reachability**: a clause fully covered by earlier unguarded clauses is
//!   dead code. Reported as a warning.
//!
//! A switch that passes the exhaustiveness check can never fail with a
//! runtime no-match for subjects of its declared type.

mod columns;
mod deconstruct;
mod exhaustiveness;
mod problem;

use seqpat_ir::{Module, StringInterner};

pub use exhaustiveness::check_switch;
pub use problem::PatternProblem;

/// Check every switch in a module, in declaration order.
pub fn check_module(module: &Module, interner: &StringInterner) -> Vec<PatternProblem> {
    module
        .switches
        .iter()
        .flat_map(|switch| check_switch(switch, interner))
        .collect()
}
