use super::*;

#[test]
fn unqualified_pattern_accepts_everything() {
    let pattern = Qualifiers::empty();
    assert!(pattern.satisfied_by(Some(Qualifiers::empty())));
    assert!(pattern.satisfied_by(Some(Qualifiers::CONST)));
    assert!(pattern.satisfied_by(Some(Qualifiers::all())));
    assert!(pattern.satisfied_by(None));
}

#[test]
fn qualified_pattern_requires_its_qualifiers() {
    let pattern = Qualifiers::CONST;
    assert!(pattern.satisfied_by(Some(Qualifiers::CONST)));
    assert!(pattern.satisfied_by(Some(Qualifiers::CONST | Qualifiers::VOLATILE)));
    assert!(!pattern.satisfied_by(Some(Qualifiers::VOLATILE)));
    assert!(!pattern.satisfied_by(Some(Qualifiers::empty())));
}

#[test]
fn qualified_pattern_rejects_unqualifiable_node() {
    assert!(!Qualifiers::VOLATILE.satisfied_by(None));
}

#[test]
fn display_orders_const_first() {
    assert_eq!(Qualifiers::all().to_string(), "const volatile");
    assert_eq!(Qualifiers::VOLATILE.to_string(), "volatile");
    assert_eq!(Qualifiers::empty().to_string(), "");
}

#[test]
fn mangle_codes() {
    let mut out = String::new();
    Qualifiers::all().mangle(&mut out);
    assert_eq!(out, "KV");
}
