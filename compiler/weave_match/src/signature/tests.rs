#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use weave_ir::PrimitiveKind;

use super::*;

fn pattern(text: &str) -> Signature {
    Signature::pattern(text).unwrap()
}

fn concrete(text: &str) -> Signature {
    Signature::concrete(text).unwrap()
}

#[test]
fn kind_follows_name_and_type() {
    assert_eq!(concrete("int").kind(), SignatureKind::Type);
    assert_eq!(concrete("int x").kind(), SignatureKind::Attribute);
    assert_eq!(concrete("int (*fp)()").kind(), SignatureKind::Attribute);
    assert_eq!(concrete("int f()").kind(), SignatureKind::Function);
    assert_eq!(concrete("void (int)").kind(), SignatureKind::Type);
}

#[test]
fn failed_parse_enters_error_state() {
    let mut signature = Signature::new(ParserConfig::pattern());
    assert_eq!(signature.state(), PatternState::New);

    let error = signature.parse("int (").unwrap_err();
    assert_eq!(error.kind, ParseErrorKind::MissingBracket);
    assert_eq!(
        signature.state(),
        PatternState::Error(ParseErrorKind::MissingBracket)
    );
    assert_eq!(signature.error(), Some(ParseErrorKind::MissingBracket));
    assert!(!signature.matches(&concrete("int")));
    assert!(!pattern("%").matches(&signature));
    assert_eq!(signature.to_string(), "<error E1005>");

    signature.parse("int").unwrap();
    assert!(signature.is_valid());
    assert!(signature.matches(&concrete("int")));
}

#[test]
fn parse_keeps_configuration() {
    let mut signature = Signature::new(ParserConfig::concrete());
    assert_eq!(
        signature.parse("% f()").unwrap_err().kind,
        ParseErrorKind::WildcardNotAllowed
    );
    assert_eq!(signature.config(), ParserConfig::concrete());
}

#[test]
fn declared_signatures_are_adjusted() {
    let ty = TypePattern::primitive(PrimitiveKind::Int)
        .into_function(vec![TypePattern::primitive(PrimitiveKind::Void)], false);
    let signature = Signature::declared(Some(QualifiedName::ident("f")), ty);
    assert_eq!(signature.kind(), SignatureKind::Function);
    assert_eq!(signature.adjustments(), Adjustments::VOID_PARAMETER_LIST);
    assert_eq!(signature.to_string(), "int f()");
    assert!(pattern("int f()").matches(&signature));
}

#[test]
fn adjustments_are_reported() {
    let signature = concrete("void f(int [3], const int, void (int))");
    assert_eq!(
        signature.adjustments(),
        Adjustments::ARRAY_TO_POINTER
            | Adjustments::QUALIFIER_DROPPED
            | Adjustments::FUNCTION_TO_POINTER
    );
    assert_eq!(signature.to_string(), "void f(int *, int, void (*)(int))");
    assert_eq!(concrete("void f(int)").adjustments(), Adjustments::empty());
}

#[test]
fn declare_virtual_and_static() {
    let mut function = concrete("void C::f()");
    function.declare_virtual_function().unwrap();
    assert!(function.is_virtual());
    assert_eq!(
        function.declare_static(),
        Err(SignatureError::VirtualStaticConflict)
    );

    let mut attribute = concrete("int C::n");
    assert_eq!(
        attribute.declare_virtual_function(),
        Err(SignatureError::VirtualNonFunction)
    );
    attribute.declare_static().unwrap();
    assert!(attribute.is_static());

    let mut ty = concrete("int");
    assert_eq!(ty.declare_static(), Err(SignatureError::StaticType));
    assert!(!ty.is_static());

    let mut unparsed = Signature::new(ParserConfig::concrete());
    assert_eq!(unparsed.declare_static(), Err(SignatureError::Invalid));
}

#[test]
fn specifiers_restrict_matches() {
    let mut virtual_f = concrete("void C::f()");
    virtual_f.declare_virtual_function().unwrap();
    let plain_f = concrete("void C::f()");

    let wants_virtual = pattern("virtual % %(...)");
    assert!(wants_virtual.matches(&virtual_f));
    assert!(!wants_virtual.matches(&plain_f));
    assert!(pattern("% %(...)").matches(&virtual_f));

    let wants_static = pattern("static % ...::%");
    assert!(wants_static.matches(&concrete("static int C::n")));
    assert!(!wants_static.matches(&concrete("int C::n")));
}

#[test]
fn kinds_must_agree() {
    assert!(!pattern("int %").matches(&concrete("int")));
    assert!(!pattern("int").matches(&concrete("int x")));
    assert!(!pattern("int ()").matches(&concrete("int f()")));
    assert!(!pattern("const %").matches(&concrete("const int x")));
    assert!(pattern("%").matches(&concrete("const int x")));
}

#[test]
fn display_includes_specifiers() {
    assert_eq!(
        concrete("virtual void C::f() const").to_string(),
        "virtual void C::f() const"
    );
    assert_eq!(concrete("static int C::count").to_string(), "static int C::count");
    assert_eq!(
        Signature::new(ParserConfig::pattern()).to_string(),
        "<unparsed>"
    );
}

#[test]
fn printed_modulo_pattern_parses_back() {
    let modulo = pattern("% operator %%(...)");
    let printed = modulo.to_string();
    assert_eq!(printed, "% operator %%(...)");
    let reparsed = pattern(&printed);
    assert_eq!(reparsed, modulo);
    assert!(reparsed.matches(&concrete("int operator%(int)")));
    assert!(!reparsed.matches(&concrete("int operator+(int)")));

    assert_eq!(
        pattern("% A::operator %%=(int)").to_string(),
        "% A::operator %%=(int)"
    );
    assert_eq!(concrete("int operator%(int)").to_string(), "int operator %(int)");
}

#[test]
fn mangled_forms() {
    assert_eq!(concrete("int").mangled(), "i");
    assert_eq!(concrete("void f(int)").mangled(), "_Z1fFviE");
    assert_eq!(concrete("void f()").mangled(), "_Z1fFvvE");
    assert_eq!(concrete("void f(void)").mangled(), "_Z1fFvvE");
}

#[test]
fn trivial_patterns() {
    assert!(pattern("void A::f()").is_trivial_match());
    assert!(pattern("A").is_trivial_match());
    assert!(!pattern("% A::%()").is_trivial_match());
    assert!(!pattern("% ...::f()").is_trivial_match());
    assert!(!pattern("int").is_trivial_match());
    assert!(!pattern("X<int>").is_trivial_match());
}
