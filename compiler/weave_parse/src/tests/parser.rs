use pretty_assertions::assert_eq;
use weave_ir::{
    ArrayDim, NameTerminal, OperatorKind, PrimitiveKind, QualifiedName, Qualifiers, Scope,
    Specifiers, TypePattern,
};

use super::{concrete, pattern, reprint};

fn int() -> TypePattern {
    TypePattern::primitive(PrimitiveKind::Int)
}

fn primitive_of(text: &str) -> PrimitiveKind {
    match concrete(text).ty {
        TypePattern::Primitive { kind, .. } => kind,
        other => panic!("`{text}` is not a builtin: {other:?}"),
    }
}

// === Specifier sequences ===

#[test]
fn builtin_keyword_combinations() {
    assert_eq!(primitive_of("int"), PrimitiveKind::Int);
    assert_eq!(primitive_of("unsigned"), PrimitiveKind::UnsignedInt);
    assert_eq!(primitive_of("long int"), PrimitiveKind::Long);
    assert_eq!(primitive_of("short unsigned"), PrimitiveKind::UnsignedShort);
    assert_eq!(primitive_of("unsigned long long"), PrimitiveKind::UnsignedLongLong);
    assert_eq!(primitive_of("long long int"), PrimitiveKind::LongLong);
    assert_eq!(primitive_of("signed char"), PrimitiveKind::SignedChar);
    assert_eq!(primitive_of("char unsigned"), PrimitiveKind::UnsignedChar);
    assert_eq!(primitive_of("long double"), PrimitiveKind::LongDouble);
    assert_eq!(primitive_of("unsigned __int128"), PrimitiveKind::UnsignedInt128);
    assert_eq!(primitive_of("wchar_t"), PrimitiveKind::WChar);
}

#[test]
fn qualifiers_in_any_position() {
    let expected = TypePattern::primitive(PrimitiveKind::Char).with_qualifiers(Qualifiers::all());
    assert_eq!(concrete("const volatile char").ty, expected);
    assert_eq!(concrete("char volatile const").ty, expected);
}

#[test]
fn wildcard_type_name() {
    assert_eq!(pattern("%").ty, TypePattern::any());
    assert_eq!(
        pattern("const %").ty,
        TypePattern::any().with_qualifiers(Qualifiers::CONST)
    );
}

#[test]
fn keyword_prefix_is_not_a_keyword() {
    let declaration = concrete("integer");
    assert_eq!(
        declaration.ty,
        TypePattern::named(QualifiedName::ident("integer"))
    );
}

#[test]
fn name_after_builtin_is_the_declarator() {
    let declaration = concrete("unsigned Foo");
    assert_eq!(declaration.ty, TypePattern::primitive(PrimitiveKind::UnsignedInt));
    assert_eq!(declaration.name, Some(QualifiedName::ident("Foo")));
}

#[test]
fn root_scope() {
    let declaration = pattern("::");
    assert_eq!(declaration.ty, TypePattern::named(QualifiedName::ident("::")));
    assert_eq!(declaration.name, None);
}

// === Declarators ===

#[test]
fn member_function() {
    let declaration = concrete("int C::f(char) const");
    assert_eq!(reprint(&declaration), "int C::f(char) const");
    assert_eq!(
        declaration.name,
        Some(QualifiedName::ident("f").in_scope(Scope::named("C")))
    );
    match declaration.ty {
        TypePattern::Function {
            ret,
            params,
            variadic,
            quals,
        } => {
            assert_eq!(*ret, int());
            assert_eq!(params, vec![TypePattern::primitive(PrimitiveKind::Char)]);
            assert!(!variadic);
            assert_eq!(quals, Qualifiers::CONST);
        }
        other => panic!("not a function: {other:?}"),
    }
}

#[test]
fn wildcard_function_in_any_scope() {
    let declaration = pattern("% ...::%(...)");
    assert_eq!(reprint(&declaration), "% ...::%(...)");
    assert_eq!(declaration.ty, TypePattern::any().into_function(vec![], true));
    let name = declaration.name.unwrap();
    assert_eq!(name.scopes(), &[Scope::Ellipsis]);
    assert_eq!(name.ident_str(), Some("%"));
}

#[test]
fn omitted_return_type_in_a_pattern() {
    let declaration = pattern("...::X::%(...)");
    assert_eq!(declaration.ty, TypePattern::any().into_function(vec![], true));
    let name = declaration.name.unwrap();
    assert_eq!(name.scopes(), &[Scope::Ellipsis, Scope::named("X")]);
    assert_eq!(name.ident_str(), Some("%"));

    let declaration = pattern("virtual C::f(int) const");
    assert_eq!(declaration.specifiers, Specifiers::VIRTUAL);
    assert_eq!(reprint(&declaration), "% C::f(int) const");

    // A blank before the parameter list keeps a function type.
    assert_eq!(pattern("A (int)").name, None);
    assert_eq!(concrete("A(int)").name, None);
}

#[test]
fn nested_function_pointer_declarator() {
    let text = "void (*signal(int, void (*)(int)))(int)";
    let declaration = concrete(text);
    assert_eq!(reprint(&declaration), text);
    assert_eq!(declaration.name, Some(QualifiedName::ident("signal")));

    let handler = TypePattern::primitive(PrimitiveKind::Void)
        .into_function(vec![int()], false)
        .into_pointer();
    let expected = handler.clone().into_function(vec![int(), handler], false);
    assert_eq!(declaration.ty, expected);
}

#[test]
fn pointer_to_array_and_array_of_pointers() {
    assert_eq!(
        concrete("int (*)[3]").ty,
        int().into_array(ArrayDim::Fixed(3)).into_pointer()
    );
    assert_eq!(
        concrete("int *[3]").ty,
        int().into_pointer().into_array(ArrayDim::Fixed(3))
    );
    assert_eq!(
        pattern("% a[%][2]").ty,
        TypePattern::any()
            .into_array(ArrayDim::Fixed(2))
            .into_array(ArrayDim::Any)
    );
}

#[test]
fn pointer_qualifiers_bind_to_the_pointer() {
    let declaration = concrete("const char *const *p");
    assert_eq!(reprint(&declaration), "const char * const *p");
    let expected = TypePattern::primitive(PrimitiveKind::Char)
        .with_qualifiers(Qualifiers::CONST)
        .into_pointer()
        .with_qualifiers(Qualifiers::CONST)
        .into_pointer();
    assert_eq!(declaration.ty, expected);
}

#[test]
fn member_pointers() {
    let mut scope = QualifiedName::new();
    scope.push_scope(Scope::named("A"));

    assert_eq!(concrete("int A::*").ty, int().into_member_pointer(scope.clone()));

    let declaration = concrete("void (A::*pm)(int) const");
    assert_eq!(reprint(&declaration), "void (A::*pm)(int) const");
    let expected = TypePattern::primitive(PrimitiveKind::Void)
        .into_function(vec![int()], false)
        .with_qualifiers(Qualifiers::CONST)
        .into_member_pointer(scope);
    assert_eq!(declaration.ty, expected);
}

#[test]
fn references() {
    assert_eq!(concrete("int &").ty, int().into_reference());
    assert_eq!(
        concrete("void (&)(...)").ty,
        TypePattern::primitive(PrimitiveKind::Void)
            .into_function(vec![], true)
            .into_reference()
    );
}

#[test]
fn variadic_after_parameters() {
    let declaration = concrete("int printf(const char *, ...)");
    assert_eq!(reprint(&declaration), "int printf(const char *, ...)");
}

#[test]
fn void_parameter_is_kept_for_adjustment() {
    let declaration = concrete("int f(void)");
    assert_eq!(
        declaration.ty,
        int().into_function(vec![TypePattern::primitive(PrimitiveKind::Void)], false)
    );
}

// === Names ===

#[test]
fn template_arguments() {
    assert_eq!(
        reprint(&concrete("std::vector<int, std::allocator<int> >")),
        "std::vector<int, std::allocator<int>>"
    );
    assert_eq!(reprint(&pattern("X<-2, &g, %, ...>")), "X<-2, &g, %, ...>");
    assert_eq!(reprint(&pattern("X<% *, 10UL>")), "X<% *, 10>");
}

#[test]
fn templated_scope() {
    let declaration = concrete("void std::vector<int>::push_back(const int &)");
    assert_eq!(
        reprint(&declaration),
        "void std::vector<int>::push_back(const int &)"
    );
    assert_eq!(declaration.name.unwrap().scopes().len(), 2);
}

#[test]
fn unnamed_namespace() {
    let declaration = concrete("void <unnamed>::helper()");
    let name = declaration.name.unwrap();
    assert_eq!(name.scopes(), &[Scope::named("<unnamed>")]);
    assert_eq!(name.ident_str(), Some("helper"));
}

// === Operators ===

fn operator_of(declaration: &crate::Declaration) -> OperatorKind {
    match declaration.name.as_ref().map(QualifiedName::terminal) {
        Some(NameTerminal::Operator(op)) => *op,
        other => panic!("not an operator: {other:?}"),
    }
}

#[test]
fn operator_function_ids() {
    assert_eq!(
        operator_of(&concrete("bool A::operator==(const A &) const")),
        OperatorKind::Eq
    );
    assert_eq!(
        operator_of(&concrete("void *operator new[](unsigned long)")),
        OperatorKind::NewArray
    );
    assert_eq!(
        operator_of(&concrete("void operator delete(void *)")),
        OperatorKind::Delete
    );
    assert_eq!(
        operator_of(&concrete("A &A::operator<<=(int)")),
        OperatorKind::ShlAssign
    );
    assert_eq!(
        operator_of(&concrete("int F::operator()(int)")),
        OperatorKind::Call
    );
    assert_eq!(
        operator_of(&concrete("bool operator<(const A &, const A &)")),
        OperatorKind::Less
    );
}

#[test]
fn percent_operators_depend_on_mode() {
    assert_eq!(operator_of(&concrete("int operator%(int)")), OperatorKind::Modulo);
    assert_eq!(operator_of(&concrete("int operator%=(int)")), OperatorKind::ModAssign);
    assert_eq!(operator_of(&pattern("% operator %(...)")), OperatorKind::Any);
    assert_eq!(operator_of(&pattern("% operator %%(...)")), OperatorKind::Modulo);
    assert_eq!(operator_of(&pattern("% operator %%=(...)")), OperatorKind::ModAssign);
}

#[test]
fn conversion_functions() {
    let declaration = concrete("A::operator int()");
    assert_eq!(
        declaration.ty,
        TypePattern::Undefined.into_function(vec![], false)
    );
    match declaration.name.as_ref().map(QualifiedName::terminal) {
        Some(NameTerminal::Conversion(target)) => assert_eq!(**target, int()),
        other => panic!("not a conversion: {other:?}"),
    }

    let declaration = concrete("A::operator const char *() const");
    assert_eq!(reprint(&declaration), "A::operator const char *() const");
}

// === Specifiers ===

#[test]
fn virtual_and_static() {
    assert_eq!(
        concrete("virtual void C::f()").specifiers,
        Specifiers::VIRTUAL
    );
    assert_eq!(concrete("static int C::count").specifiers, Specifiers::STATIC);
    assert_eq!(concrete("void C::f()").specifiers, Specifiers::empty());
}

#[test]
fn blanks_are_insignificant() {
    assert_eq!(
        concrete("  int   C :: f ( char , long )  ").ty,
        concrete("int C::f(char,long)").ty
    );
}
