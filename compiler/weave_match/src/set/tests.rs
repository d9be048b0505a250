#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;

fn concrete(text: &str) -> Signature {
    Signature::concrete(text).unwrap()
}

#[test]
fn identical_patterns_share_an_id() {
    let mut set = PatternSet::new();
    let a = set.insert_text("% ...::f(...)").unwrap();
    let b = set.insert_text("%   ...::f( ... )").unwrap();
    let c = set.insert_text("virtual % ...::f(...)").unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(set.len(), 2);
}

#[test]
fn trailing_template_ellipsis_is_not_an_empty_list() {
    let mut set = PatternSet::new();
    let open = set.insert_text("X<...>").unwrap();
    let empty = set.insert_text("X<>").unwrap();
    assert_ne!(open, empty);
    assert_eq!(set.len(), 2);
    assert_eq!(set.matching(&concrete("X<int>")), vec![open]);
}

#[test]
fn any_type_is_not_a_class_named_any() {
    let mut set = PatternSet::new();
    let any_type = set.insert_text("%").unwrap();
    let class = set.insert_text("Any").unwrap();
    assert_ne!(any_type, class);
    assert_eq!(set.matching(&concrete("int")), vec![any_type]);
    assert_eq!(set.matching(&concrete("Any")), vec![any_type, class]);
}

#[test]
fn matching_returns_ids_in_order() {
    let mut set = PatternSet::new();
    let any_function = set.insert_text("% %(...)").unwrap();
    let ints = set.insert_text("int %(...)").unwrap();
    let _chars = set.insert_text("char %(...)").unwrap();
    let any_type = set.insert_text("%").unwrap();

    assert_eq!(
        set.matching(&concrete("int f(long)")),
        vec![any_function, ints, any_type]
    );
    assert_eq!(set.matching(&concrete("double")), vec![any_type]);
}

#[test]
fn batch_matches_agree_with_single() {
    let mut set = PatternSet::new();
    set.insert_text("% A::%(...)").unwrap();
    set.insert_text("% B::%(...)").unwrap();
    set.insert_text("int %").unwrap();

    let concretes = vec![
        concrete("void A::f()"),
        concrete("int x"),
        concrete("void C::g(int)"),
    ];
    let batch = set.matching_all(&concretes);
    for (concrete, ids) in concretes.iter().zip(&batch) {
        assert_eq!(*ids, set.matching(concrete));
    }
    assert!(batch[2].is_empty());
}

#[test]
fn get_and_iter() {
    let mut set = PatternSet::new();
    assert!(set.is_empty());
    let id = set.insert_text("int").unwrap();
    assert_eq!(set.get(id).unwrap().to_string(), "int");
    assert_eq!(set.iter().count(), 1);
    assert!(set.insert_text("int (").is_err());
    assert_eq!(set.len(), 1);
}
