use super::*;

#[test]
fn codes_are_unique() {
    let mut codes: Vec<_> = OperatorKind::ALL.iter().map(|op| op.mangled()).collect();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), OperatorKind::ALL.len());
}

#[test]
fn symbolic_table_prefers_longest_spelling() {
    let table = OperatorKind::symbolic_by_length();
    let first_match = |text: &str| {
        table
            .iter()
            .copied()
            .find(|op| text.starts_with(op.spelling()))
    };

    assert_eq!(first_match("->*x"), Some(OperatorKind::ArrowStar));
    assert_eq!(first_match("->x"), Some(OperatorKind::Arrow));
    assert_eq!(first_match("-="), Some(OperatorKind::SubAssign));
    assert_eq!(first_match("<<=("), Some(OperatorKind::ShlAssign));
    assert_eq!(first_match("<("), Some(OperatorKind::Less));
    assert_eq!(first_match("()("), Some(OperatorKind::Call));
    assert_eq!(first_match("("), None);
}

#[test]
fn symbolic_table_excludes_keywords_and_wildcard() {
    let table = OperatorKind::symbolic_by_length();
    assert!(!table.contains(&OperatorKind::New));
    assert!(!table.contains(&OperatorKind::DeleteArray));
    assert!(!table.contains(&OperatorKind::Any));
}

#[test]
fn display_includes_keyword() {
    assert_eq!(OperatorKind::Index.to_string(), "operator []");
    assert_eq!(OperatorKind::NewArray.to_string(), "operator new[]");
}
