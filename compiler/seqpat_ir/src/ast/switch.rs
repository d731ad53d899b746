//! Switch declarations: the unit the parser produces and the checker and
//! selector consume.

use crate::{CasePattern, GuardExpr, Name, Span, SubjectType};

/// One piece of a body template.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateSegment {
    /// Literal text, with `{{` and `}}` already unescaped.
    Text(String),
    /// `{name}`
    Hole { name: Name, span: Span },
}

/// The body of a case: `"only {x} and {y}"`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct BodyTemplate {
    pub segments: Vec<TemplateSegment>,
    pub span: Span,
}

impl BodyTemplate {
    /// Template made of a single text segment.
    pub fn text(text: impl Into<String>) -> Self {
        BodyTemplate {
            segments: vec![TemplateSegment::Text(text.into())],
            span: Span::DUMMY,
        }
    }

    /// Names interpolated by the template, in source order.
    pub fn holes(&self) -> impl Iterator<Item = (Name, Span)> + '_ {
        self.segments.iter().filter_map(|seg| match seg {
            TemplateSegment::Hole { name, span } => Some((*name, *span)),
            TemplateSegment::Text(_) => None,
        })
    }
}

/// `case p1 | p2 if guard => body`
///
/// Alternatives share the guard and body; the selector expands them into
/// one clause each.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Arm {
    pub patterns: Vec<CasePattern>,
    pub guard: Option<GuardExpr>,
    pub body: BodyTemplate,
    pub span: Span,
}

/// `switch name(param: type) { arms }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SwitchDecl {
    pub name: Name,
    pub name_span: Span,
    pub param: Option<Name>,
    /// Declared subject type; `None` when unannotated.
    pub subject_ty: Option<SubjectType>,
    pub arms: Vec<Arm>,
    pub span: Span,
}

impl SwitchDecl {
    /// The subject type the checker works against.
    ///
    /// Unannotated switches default to `[any]`, made nullable when some
    /// alternative matches `null`.
    pub fn effective_subject_type(&self) -> SubjectType {
        if let Some(ty) = &self.subject_ty {
            return ty.clone();
        }
        let matches_null = self
            .arms
            .iter()
            .flat_map(|arm| &arm.patterns)
            .any(|p| matches!(p, CasePattern::Null(_)));
        if matches_null {
            SubjectType::any_list().nullable()
        } else {
            SubjectType::any_list()
        }
    }
}

/// A parsed source file.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Module {
    pub switches: Vec<SwitchDecl>,
}

impl Module {
    pub fn find(&self, name: Name) -> Option<&SwitchDecl> {
        self.switches.iter().find(|s| s.name == name)
    }
}
