//! Body template rendering.

use seqpat_ir::{BodyTemplate, StringInterner, TemplateSegment};

use crate::{Bindings, Element, EvalError};

/// Interpolate `bindings` into `template`.
///
/// Strings and chars bound to a hole appear unquoted; sequences render as
/// list literals (`[1, 2]`) and the absent subject as `null`.
pub fn render<T: Element>(
    template: &BodyTemplate,
    bindings: &Bindings<'_, T>,
    interner: &StringInterner,
) -> Result<String, EvalError> {
    let mut out = String::new();
    for segment in &template.segments {
        match segment {
            TemplateSegment::Text(text) => out.push_str(text),
            TemplateSegment::Hole { name, span } => {
                let matched = bindings.get(*name).ok_or_else(|| EvalError::UnboundName {
                    name: interner.lookup(*name).to_string(),
                    span: *span,
                })?;
                out.push_str(&matched.interpolated());
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
