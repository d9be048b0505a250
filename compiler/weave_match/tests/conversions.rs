//! Conversion functions.
//!
//! The target type of `operator T()` is found by scanning back from the
//! last `)` to its `(`, so targets that contain parentheses themselves
//! need explicit coverage.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use weave_ir::{NameTerminal, PrimitiveKind, TypePattern};
use weave_match::{ParseErrorKind, Signature, SignatureKind};

fn conversion_target(signature: &Signature) -> TypePattern {
    match signature.name().map(|name| name.terminal()) {
        Some(NameTerminal::Conversion(target)) => (**target).clone(),
        other => panic!("not a conversion function: {other:?}"),
    }
}

#[test]
fn simple_target() {
    let signature = Signature::concrete("A::operator int()").unwrap();
    assert_eq!(signature.kind(), SignatureKind::Function);
    assert_eq!(
        conversion_target(&signature),
        TypePattern::primitive(PrimitiveKind::Int)
    );
    assert_eq!(signature.to_string(), "A::operator int()");
}

#[test]
fn qualified_member_conversion() {
    let signature = Signature::concrete("A::operator const char *() const").unwrap();
    assert_eq!(conversion_target(&signature).to_string(), "const char *");
    assert_eq!(signature.to_string(), "A::operator const char *() const");
}

#[test]
fn function_pointer_target() {
    let signature = Signature::concrete("A::operator void (*)(int)()").unwrap();
    assert_eq!(conversion_target(&signature).to_string(), "void (*)(int)");
    assert!(Signature::pattern("% A::operator void (*)(%)()")
        .unwrap()
        .matches(&signature));
}

#[test]
fn blanks_inside_the_argument_list() {
    let signature = Signature::concrete("A::operator bool ( ) const").unwrap();
    assert_eq!(
        conversion_target(&signature),
        TypePattern::primitive(PrimitiveKind::Bool)
    );
}

#[test]
fn patterns_over_conversions() {
    let concrete = Signature::concrete("A::operator int()").unwrap();
    let matches = |pattern: &str| Signature::pattern(pattern).unwrap().matches(&concrete);

    assert!(matches("% A::operator int()"));
    assert!(matches("% A::operator %()"));
    assert!(matches("% %::operator %()"));
    assert!(matches("% A::%()"));
    assert!(!matches("% A::operator long()"));
    assert!(!matches("% A::operator ==()"));
    assert!(!matches("% A::convert()"));
}

#[test]
fn wildcard_target() {
    let pattern = Signature::pattern("% A::operator const %()").unwrap();
    assert!(pattern.matches(&Signature::concrete("A::operator const B()").unwrap()));
    assert!(!pattern.matches(&Signature::concrete("A::operator B()").unwrap()));

    // Directly after `operator`, a `%` names any operator, not a target type.
    let any_operator = Signature::pattern("% A::operator %()").unwrap();
    assert!(matches!(
        any_operator.name().map(|name| name.terminal()),
        Some(NameTerminal::Operator(_))
    ));
}

#[test]
fn malformed_conversions() {
    let kind = |text: &str| Signature::concrete(text).unwrap_err().kind;
    assert_eq!(kind("A::operator int"), ParseErrorKind::MissingConversionArgs);
    assert_eq!(kind("A::operator int x()"), ParseErrorKind::DeclaratorNotAbstract);
    assert_eq!(kind("A::operator @()"), ParseErrorKind::InvalidOperator);
}
