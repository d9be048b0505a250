use super::*;

#[test]
fn codes_are_sequential() {
    for (index, kind) in ParseErrorKind::ALL.iter().enumerate() {
        assert_eq!(kind.code(), format!("E{}", 1001 + index));
    }
}

#[test]
fn from_code_round_trips() {
    for kind in ParseErrorKind::ALL {
        assert_eq!(ParseErrorKind::from_code(kind.code()), Some(kind));
    }
    assert_eq!(
        ParseErrorKind::from_code("e1005"),
        Some(ParseErrorKind::MissingBracket)
    );
    assert_eq!(ParseErrorKind::from_code("E9999"), None);
}

#[test]
fn explanations_are_present() {
    for kind in ParseErrorKind::ALL {
        assert!(!kind.explanation().is_empty(), "{kind:?}");
    }
}

#[test]
fn display_includes_offset() {
    let error = ParseError::new(ParseErrorKind::MissingBracket, 7);
    assert_eq!(error.to_string(), "missing closing bracket (at offset 7)");
    assert_eq!(error.code(), "E1005");
}
