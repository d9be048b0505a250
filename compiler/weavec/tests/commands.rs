//! Library-level tests for the command helpers.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use weave_match::Signature;
use weavec::commands::match_verdicts;

#[test]
fn verdicts_follow_input_order() {
    let pattern = Signature::pattern("% A::get%()").unwrap();
    let concretes: Vec<Signature> = ["int A::getX()", "void A::setX(int)", "long A::getY()"]
        .into_iter()
        .map(|text| Signature::concrete(text).unwrap())
        .collect();

    let verdicts: Vec<(String, bool)> = match_verdicts(pattern, &concretes)
        .into_iter()
        .map(|(signature, matched)| (signature.to_string(), matched))
        .collect();

    assert_eq!(
        verdicts,
        vec![
            ("int A::getX()".to_string(), true),
            ("void A::setX(int)".to_string(), false),
            ("long A::getY()".to_string(), true),
        ]
    );
}

#[test]
fn no_concretes() {
    let pattern = Signature::pattern("%").unwrap();
    assert!(match_verdicts(pattern, &[]).is_empty());
}
