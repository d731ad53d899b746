//! Case selection: ordered clauses, first match wins.
//!
//! A selector is built once and never mutated; it is `Send + Sync` and can
//! be shared across threads. Each evaluation owns its bindings.

use std::sync::Arc;

use seqpat_ir::{BodyTemplate, CasePattern, SharedInterner, StringInterner, SwitchDecl, Value};
use tracing::{error, trace};

use crate::{match_case, render, Bindings, Element, EvalError, Guard, Matched};

/// One `(pattern, guard, body)` entry.
///
/// Alternatives of one arm become separate clauses sharing the arm's guard
/// and body.
struct Clause<T> {
    pattern: CasePattern,
    guard: Option<Arc<dyn Guard<T>>>,
    /// Index into the selector's bodies; also the arm index.
    arm: usize,
}

/// The winning clause of an evaluation.
#[derive(Debug)]
pub struct Selection<'s, 'v, T, B> {
    pub body: &'s B,
    pub bindings: Bindings<'v, T>,
    /// Index of the arm the clause came from, in declaration order.
    pub arm: usize,
}

/// Ordered clauses evaluated first-match-wins.
pub struct CaseSelector<T, B> {
    clauses: Arc<[Clause<T>]>,
    bodies: Arc<[B]>,
    interner: SharedInterner,
}

impl<T, B> Clone for CaseSelector<T, B> {
    fn clone(&self) -> Self {
        CaseSelector {
            clauses: Arc::clone(&self.clauses),
            bodies: Arc::clone(&self.bodies),
            interner: self.interner.clone(),
        }
    }
}

impl<T: Element, B> CaseSelector<T, B> {
    pub fn builder(interner: SharedInterner) -> CaseSelectorBuilder<T, B> {
        CaseSelectorBuilder {
            clauses: Vec::new(),
            bodies: Vec::new(),
            interner,
        }
    }

    /// Number of clauses after expanding alternatives.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Select the first clause whose pattern matches and whose guard holds.
    ///
    /// `None` is the absent subject. A clause whose pattern matches but whose
    /// guard fails does not stop the search.
    pub fn evaluate<'v>(
        &self,
        subject: Option<&'v [T]>,
    ) -> Result<Selection<'_, 'v, T, B>, EvalError> {
        self.select(subject.map_or(Matched::Null, Matched::Sequence))
    }

    fn select<'v>(&self, subject: Matched<'v, T>) -> Result<Selection<'_, 'v, T, B>, EvalError> {
        for (index, clause) in self.clauses.iter().enumerate() {
            let Some(bindings) = match_case(&clause.pattern, subject, &self.interner) else {
                trace!(clause = index, "pattern rejected subject");
                continue;
            };
            if let Some(guard) = &clause.guard {
                if !guard.check(&bindings, &self.interner)? {
                    trace!(clause = index, "guard rejected match");
                    continue;
                }
            }
            trace!(clause = index, arm = clause.arm, "selected clause");
            return Ok(Selection {
                body: &self.bodies[clause.arm],
                bindings,
                arm: clause.arm,
            });
        }

        let err = EvalError::NoMatch {
            subject: subject.to_value().to_string(),
        };
        error!(error = %err, clauses = self.clauses.len(), "no case matched");
        Err(err)
    }
}

impl<B> CaseSelector<Value, B> {
    /// Evaluate a runtime value: `null` is the absent subject, a list is a
    /// sequence subject, and any other value can only be caught by `_` or a
    /// bare name.
    pub fn evaluate_value<'v>(
        &self,
        subject: &'v Value,
    ) -> Result<Selection<'_, 'v, Value, B>, EvalError> {
        let subject = match subject {
            Value::Null => Matched::Null,
            Value::List(items) => Matched::Sequence(&items[..]),
            other => Matched::Element(other),
        };
        self.select(subject)
    }
}

impl CaseSelector<Value, BodyTemplate> {
    /// Build the selector for a parsed switch.
    pub fn from_switch(decl: &SwitchDecl, interner: SharedInterner) -> Self {
        let mut builder = Self::builder(interner);
        for arm in &decl.arms {
            let guard = arm
                .guard
                .clone()
                .map(|g| Arc::new(g) as Arc<dyn Guard<Value>>);
            builder = builder.arm_with(arm.patterns.iter().cloned(), guard, arm.body.clone());
        }
        builder.build()
    }

    /// Select a case for `subject` and render its body.
    pub fn run(&self, subject: &Value) -> Result<String, EvalError> {
        let selection = self.evaluate_value(subject)?;
        render(selection.body, &selection.bindings, &self.interner)
    }
}

/// Collects arms in declaration order.
pub struct CaseSelectorBuilder<T, B> {
    clauses: Vec<Clause<T>>,
    bodies: Vec<B>,
    interner: SharedInterner,
}

impl<T: Element, B> CaseSelectorBuilder<T, B> {
    /// `case p1 | p2 | ... => body`
    #[must_use]
    pub fn arm(self, patterns: impl IntoIterator<Item = CasePattern>, body: B) -> Self {
        self.arm_with(patterns, None, body)
    }

    /// `case p1 | p2 | ... if guard => body`
    #[must_use]
    pub fn guarded_arm<G>(
        self,
        patterns: impl IntoIterator<Item = CasePattern>,
        guard: G,
        body: B,
    ) -> Self
    where
        G: Guard<T> + 'static,
    {
        let guard: Arc<dyn Guard<T>> = Arc::new(guard);
        self.arm_with(patterns, Some(guard), body)
    }

    fn arm_with(
        mut self,
        patterns: impl IntoIterator<Item = CasePattern>,
        guard: Option<Arc<dyn Guard<T>>>,
        body: B,
    ) -> Self {
        let arm = self.bodies.len();
        self.bodies.push(body);
        for pattern in patterns {
            self.clauses.push(Clause {
                pattern,
                guard: guard.clone(),
                arm,
            });
        }
        self
    }

    pub fn build(self) -> CaseSelector<T, B> {
        CaseSelector {
            clauses: self.clauses.into(),
            bodies: self.bodies.into(),
            interner: self.interner,
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
