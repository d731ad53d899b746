use pretty_assertions::assert_eq;
use seqpat_ir::{Span, Value};

use super::*;
use crate::Matched;

#[test]
fn test_render_mixed_bindings() {
    let interner = StringInterner::new();
    let head = interner.intern("head");
    let tail = interner.intern("tail");
    let template = BodyTemplate {
        segments: vec![
            TemplateSegment::Hole {
                name: head,
                span: Span::DUMMY,
            },
            TemplateSegment::Text(" :: ".into()),
            TemplateSegment::Hole {
                name: tail,
                span: Span::DUMMY,
            },
        ],
        span: Span::DUMMY,
    };
    let subject = [Value::str("a"), Value::str("b"), Value::Int(3)];
    let mut bindings = Bindings::new();
    bindings.push(head, Matched::Element(&subject[0]));
    bindings.push(tail, Matched::Sequence(&subject[1..]));
    assert_eq!(
        render(&template, &bindings, &interner),
        Ok("a :: [\"b\", 3]".to_string())
    );
}

#[test]
fn test_render_null_and_missing() {
    let interner = StringInterner::new();
    let all = interner.intern("all");
    let template = BodyTemplate {
        segments: vec![TemplateSegment::Hole {
            name: all,
            span: Span::new(1, 6),
        }],
        span: Span::DUMMY,
    };
    let mut bindings: Bindings<'_, i64> = Bindings::new();
    let err = render(&template, &bindings, &interner).unwrap_err();
    assert_eq!(
        err,
        EvalError::UnboundName {
            name: "all".into(),
            span: Span::new(1, 6),
        }
    );
    bindings.push(all, Matched::Null);
    assert_eq!(render(&template, &bindings, &interner), Ok("null".to_string()));
}
