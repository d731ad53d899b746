//! Exhaustiveness and reachability checking for switch clauses.
//!
//! # Algorithm
//!
//! Maranget's usefulness algorithm ("Warnings for pattern matching", 2007)
//! over a matrix of deconstructed patterns, one row per clause. A pattern
//! vector is *useful* with respect to a matrix when some value matches it
//! and no row of the matrix.
//!
//! - The switch is exhaustive iff the all-wildcard vector is not useful
//!   against the unguarded rows. When it is useful, the recursion builds
//!   witnesses: the missing patterns reported to the user.
//! - A clause is unreachable iff its pattern is not useful against the
//!   unguarded clauses above it.
//!
//! Guarded clauses never count as covering anything, since their guard may
//! fail. They are still checked for reachability themselves.
//!
//! List columns are split with the slice constructors described in
//! [`crate::deconstruct`]. Constructors no non-wildcard head names are
//! handled together through the default matrix, so a wide pattern does not
//! cost one specialization per possible length.

use rustc_hash::FxHashSet;
use seqpat_ir::{Span, StringInterner, SubjectType, SwitchDecl};
use seqpat_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::columns::Columns;
use crate::deconstruct::{split_ctors, Ctor, Pat, Row, Witness, ANY};
use crate::PatternProblem;

/// Column types, parallel to the rows of a matrix.
type Types<'t> = Columns<&'t SubjectType>;

/// One alternative of one arm.
struct Clause {
    row: Row,
    guarded: bool,
    span: Span,
    arm_index: usize,
}

/// Check a switch for missing and unreachable clauses.
///
/// Problems come back in source order: unreachable clauses first, then at
/// most one non-exhaustive report.
pub fn check_switch(switch: &SwitchDecl, interner: &StringInterner) -> Vec<PatternProblem> {
    let ty = switch.effective_subject_type();
    let tys = Types::empty().prepend(std::iter::once(&ty));

    let clauses: Vec<Clause> = switch
        .arms
        .iter()
        .enumerate()
        .flat_map(|(arm_index, arm)| {
            arm.patterns.iter().map(move |pattern| Clause {
                row: Row::empty().prepend(std::iter::once(Pat::from_case(pattern))),
                guarded: arm.guard.is_some(),
                span: pattern.span(),
                arm_index,
            })
        })
        .collect();

    let mut problems = Vec::new();
    let mut covering: Vec<Row> = Vec::new();
    for clause in &clauses {
        if !is_useful(&covering, &clause.row, &tys) {
            problems.push(PatternProblem::Unreachable {
                clause_span: clause.span,
                switch_span: switch.name_span,
                arm_index: clause.arm_index,
            });
        }
        if !clause.guarded {
            covering.push(clause.row.clone());
        }
    }

    let witnesses = compute_witnesses(&covering, &tys);
    if !witnesses.is_empty() {
        let mut seen = FxHashSet::default();
        let missing: Vec<String> = witnesses
            .iter()
            .filter_map(|w| w.last())
            .map(|w| w.display(interner).to_string())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        problems.push(PatternProblem::NonExhaustive {
            switch_span: switch.name_span,
            subject_ty: ty.to_string(),
            missing,
        });
    }

    debug!(
        switch = interner.lookup(switch.name),
        clauses = clauses.len(),
        problems = problems.len(),
        "checked switch"
    );
    problems
}

/// Patterns heading the rows of `matrix`.
fn heads(matrix: &[Row]) -> impl Iterator<Item = &Pat> + Clone {
    matrix.iter().filter_map(|row| row.first())
}

/// Rows whose head covers `ctor`, with the head replaced by its fields.
fn specialize(matrix: &[Row], ctor: Ctor) -> Vec<Row> {
    matrix
        .iter()
        .filter_map(|row| specialize_row(row, ctor))
        .collect()
}

fn specialize_row(row: &Row, ctor: Ctor) -> Option<Row> {
    let fields = row.first()?.specialize(ctor)?;
    Some(row.tail().prepend(fields.into_iter()))
}

/// Rows headed by a wildcard, with the head removed.
fn default_matrix(matrix: &[Row]) -> Vec<Row> {
    matrix
        .iter()
        .filter(|row| row.first().is_some_and(Pat::is_wild))
        .map(Row::tail)
        .collect()
}

/// Column types after specializing the first column by `ctor`.
fn specialize_types<'t>(tys: &Types<'t>, ctor: Ctor) -> Types<'t> {
    let ty = tys.first().copied().unwrap_or(&ANY);
    tys.tail().prepend(ctor.field_types(ty))
}

/// Whether some non-wildcard head covers `ctor`. Constructors no head
/// names behave alike: only the wildcard rows match them.
fn is_present(matrix: &[Row], ctor: Ctor) -> bool {
    heads(matrix).any(|head| !head.is_wild() && head.covers(ctor))
}

/// Is there a value matched by `v` and by no row of `matrix`?
fn is_useful(matrix: &[Row], v: &Row, tys: &Types<'_>) -> bool {
    let Some(head) = v.first() else {
        return matrix.is_empty();
    };
    // Every pattern matches some value.
    if matrix.is_empty() {
        return true;
    }

    ensure_sufficient_stack(|| {
        let ty = tys.first().copied().unwrap_or(&ANY);
        let ctors = split_ctors(ty, heads(matrix).chain(std::iter::once(head)));
        let useful_for = |ctor: Ctor| {
            specialize_row(v, ctor).is_some_and(|sub_v| {
                is_useful(&specialize(matrix, ctor), &sub_v, &specialize_types(tys, ctor))
            })
        };

        if let Some(own) = head.ctor() {
            let mut covered: Vec<Ctor> = ctors.into_iter().filter(|&c| head.covers(c)).collect();
            if covered.is_empty() {
                // The pattern names a constructor outside the declared type.
                covered.push(own);
            }
            return covered.into_iter().any(useful_for);
        }

        if ctors.iter().all(|&ctor| is_present(matrix, ctor)) {
            ctors.into_iter().any(useful_for)
        } else {
            is_useful(&default_matrix(matrix), &v.tail(), &tys.tail())
        }
    })
}

/// Witnesses of the all-wildcard vector's usefulness: value shapes no row
/// matches. Empty when the matrix is exhaustive.
///
/// Each witness holds one pattern per column, last column first, so a
/// caller adds its own column with a push.
fn compute_witnesses(matrix: &[Row], tys: &Types<'_>) -> Vec<Vec<Witness>> {
    let Some(&ty) = tys.first() else {
        return if matrix.is_empty() {
            vec![Vec::new()]
        } else {
            Vec::new()
        };
    };
    if matrix.is_empty() {
        return vec![vec![Witness::Wild; tys.len()]];
    }

    ensure_sufficient_stack(|| {
        let ctors = split_ctors(ty, heads(matrix));
        let present: Vec<bool> = ctors.iter().map(|&c| is_present(matrix, c)).collect();
        let any_present = present.contains(&true);
        let missing = present.iter().filter(|&&p| !p).count();

        // Missing constructors share the default matrix's witnesses. With
        // no constructor in the column they are reported once, as `_`.
        let mut rest = if missing == 0 {
            Vec::new()
        } else {
            compute_witnesses(&default_matrix(matrix), &tys.tail())
        };
        let mut uses_left = if any_present { missing } else { 1 };

        let mut out = Vec::new();
        for (ctor, named) in ctors.into_iter().zip(present) {
            if named {
                let arity = ctor.arity();
                let sub_tys = specialize_types(tys, ctor);
                for mut columns in compute_witnesses(&specialize(matrix, ctor), &sub_tys) {
                    let mut fields = columns.split_off(columns.len().saturating_sub(arity));
                    fields.reverse();
                    columns.push(Witness::apply(ctor, fields));
                    out.push(columns);
                }
                continue;
            }
            if uses_left == 0 {
                continue;
            }
            uses_left -= 1;

            let head = if any_present {
                Witness::apply(ctor, vec![Witness::Wild; ctor.arity()])
            } else {
                Witness::Wild
            };
            if uses_left == 0 {
                out.extend(std::mem::take(&mut rest).into_iter().map(|mut columns| {
                    columns.push(head.clone());
                    columns
                }));
            } else {
                out.extend(rest.iter().map(|columns| {
                    let mut witness = columns.clone();
                    witness.push(head.clone());
                    witness
                }));
            }
        }
        out
    })
}
