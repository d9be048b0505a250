use super::*;
use crate::PrimitiveKind;

fn ty(kind: PrimitiveKind) -> TemplateArg {
    TemplateArg::Type(TypePattern::primitive(kind))
}

fn list(args: Vec<TemplateArg>) -> TemplateArgList {
    TemplateArgList::from(args)
}

#[test]
fn exact_lists_must_have_equal_length() {
    let concrete = list(vec![ty(PrimitiveKind::Int), ty(PrimitiveKind::Int)]);
    assert!(list(vec![ty(PrimitiveKind::Int), ty(PrimitiveKind::Int)]).matches(&concrete));
    assert!(!list(vec![ty(PrimitiveKind::Int)]).matches(&concrete));
    assert!(!list(vec![
        ty(PrimitiveKind::Int),
        ty(PrimitiveKind::Int),
        ty(PrimitiveKind::Int)
    ])
    .matches(&concrete));
}

#[test]
fn ellipsis_accepts_remaining_arguments() {
    let concrete = list(vec![
        ty(PrimitiveKind::Int),
        ty(PrimitiveKind::Double),
        ty(PrimitiveKind::Char),
    ]);
    assert!(list(vec![TemplateArg::Any, TemplateArg::Ellipsis]).matches(&concrete));
    assert!(list(vec![TemplateArg::Ellipsis]).matches(&concrete));
    assert!(list(vec![TemplateArg::Ellipsis]).matches(&list(vec![])));
    assert!(!list(vec![ty(PrimitiveKind::Double), TemplateArg::Ellipsis]).matches(&concrete));
}

#[test]
fn any_needs_an_argument() {
    assert!(!list(vec![TemplateArg::Any]).matches(&list(vec![])));
    assert!(list(vec![TemplateArg::Any]).matches(&list(vec![TemplateArg::Value(7)])));
}

#[test]
fn argument_kinds_must_agree() {
    assert!(TemplateArg::Value(3).matches(&TemplateArg::Value(3)));
    assert!(!TemplateArg::Value(3).matches(&TemplateArg::Value(-3)));
    assert!(!TemplateArg::Value(3).matches(&ty(PrimitiveKind::Int)));

    let address = TemplateArg::Address(QualifiedName::ident("f%"));
    assert!(address.matches(&TemplateArg::Address(QualifiedName::ident("foo"))));
    assert!(!address.matches(&TemplateArg::Value(0)));
}

#[test]
fn display() {
    let args = list(vec![
        ty(PrimitiveKind::Int),
        TemplateArg::Value(-2),
        TemplateArg::Address(QualifiedName::ident("g")),
        TemplateArg::Any,
        TemplateArg::Ellipsis,
    ]);
    assert_eq!(args.to_string(), "<int, -2, &g, %, ...>");
}

#[test]
fn mangle() {
    let args = list(vec![
        ty(PrimitiveKind::Int),
        TemplateArg::Value(-2),
        TemplateArg::Address(QualifiedName::ident("g")),
        TemplateArg::Any,
        TemplateArg::Ellipsis,
    ]);
    let mut out = String::new();
    args.mangle(&mut out);
    assert_eq!(out, "IiLxn2EL1gE_X__Xz_E");
}
