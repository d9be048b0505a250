use super::Specifiers;

#[test]
fn keywords_in_canonical_order() {
    let all: Vec<_> = (Specifiers::STATIC | Specifiers::VIRTUAL).keywords().collect();
    assert_eq!(all, ["virtual", "static"]);
    assert_eq!(Specifiers::empty().keywords().count(), 0);
    assert_eq!(Specifiers::STATIC.keywords().collect::<Vec<_>>(), ["static"]);
}
