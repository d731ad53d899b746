use pretty_assertions::assert_eq;
use seqpat_ir::StringInterner;

use super::*;

fn split(text: &str, interner: &StringInterner) -> Result<Vec<TemplateSegment>, ParseError> {
    let len = u32::try_from(text.len()).unwrap_or(0);
    split_template(text, Span::new(0, len + 2), |n| interner.intern(n))
}

#[test]
fn test_holes_and_text() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_eq!(
        split("only {x} and {y}", &interner),
        Ok(vec![
            TemplateSegment::Text("only ".into()),
            TemplateSegment::Hole { name: x, span: Span::new(6, 9) },
            TemplateSegment::Text(" and ".into()),
            TemplateSegment::Hole { name: y, span: Span::new(14, 17) },
        ])
    );
}

#[test]
fn test_escaped_braces() {
    let interner = StringInterner::new();
    assert_eq!(
        split("{{literal}}", &interner),
        Ok(vec![TemplateSegment::Text("{literal}".into())])
    );
}

#[test]
fn test_empty_template_is_one_empty_text() {
    let interner = StringInterner::new();
    assert_eq!(split("", &interner), Ok(vec![TemplateSegment::Text(String::new())]));
}

#[test]
fn test_malformed_templates() {
    let interner = StringInterner::new();
    for bad in ["{x", "x}", "{}", "{x y}", "{1}"] {
        let err = split(bad, &interner).unwrap_err();
        assert!(
            matches!(err.kind, ParseErrorKind::InvalidTemplate { .. }),
            "{bad}"
        );
    }
}
