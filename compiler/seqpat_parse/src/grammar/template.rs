//! Body template parsing.
//!
//! A body is a string literal whose `{name}` holes interpolate bindings.
//! `{{` and `}}` stand for literal braces.

use seqpat_ir::{BodyTemplate, Name, Span, TemplateSegment, TokenKind};

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    pub(crate) fn parse_body_template(&mut self) -> Result<BodyTemplate, ParseError> {
        let TokenKind::Str(text) = self.cursor.current_kind() else {
            return Err(self.cursor.unexpected("a string body"));
        };
        let span = self.cursor.advance().span;
        let interner = self.cursor.interner();
        let segments = split_template(interner.lookup(text), span, |name| interner.intern(name))?;
        Ok(BodyTemplate { segments, span })
    }
}

/// Split template text into segments.
///
/// Hole spans are computed from byte offsets inside the literal and clamped
/// to the literal's span, so they are exact unless the literal uses escapes.
fn split_template(
    text: &str,
    literal_span: Span,
    mut intern: impl FnMut(&str) -> Name,
) -> Result<Vec<TemplateSegment>, ParseError> {
    let invalid =
        |reason| ParseError::new(ParseErrorKind::InvalidTemplate { reason }, literal_span);
    let hole_span = |start: usize, end: usize| {
        let clamp = |offset: usize| {
            let offset = u32::try_from(offset).unwrap_or(u32::MAX);
            literal_span
                .start
                .saturating_add(1)
                .saturating_add(offset)
                .min(literal_span.end)
        };
        Span::new(clamp(start), clamp(end))
    };

    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, next)| next) == Some('{') => {
                chars.next();
                buf.push('{');
            }
            '}' if chars.peek().map(|&(_, next)| next) == Some('}') => {
                chars.next();
                buf.push('}');
            }
            '{' => {
                let close = text[i + 1..]
                    .find('}')
                    .map(|pos| i + 1 + pos)
                    .ok_or_else(|| invalid("unclosed `{`"))?;
                let name = text[i + 1..close].trim();
                if !is_identifier(name) {
                    return Err(invalid("holes must contain a single binding name"));
                }
                if !buf.is_empty() {
                    segments.push(TemplateSegment::Text(std::mem::take(&mut buf)));
                }
                segments.push(TemplateSegment::Hole {
                    name: intern(name),
                    span: hole_span(i, close + 1),
                });
                while chars.peek().is_some_and(|&(j, _)| j <= close) {
                    chars.next();
                }
            }
            '}' => return Err(invalid("unmatched `}`")),
            c => buf.push(c),
        }
    }

    if !buf.is_empty() || segments.is_empty() {
        segments.push(TemplateSegment::Text(buf));
    }
    Ok(segments)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests;
