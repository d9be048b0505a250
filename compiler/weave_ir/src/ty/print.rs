//! Declarator-aware printing.
//!
//! C++ declarators are written inside-out: the name sits in the middle and
//! pointers bind tighter than functions and arrays unless parenthesized.
//! Each node therefore prints by building the declarator text around the
//! `inner` part (a name or an already printed declarator) and passing it
//! down to its child. `prefix` records that `inner` starts with a pointer
//! operator and needs parentheses before a `(...)` or `[...]` suffix.

use std::fmt::{self, Write as _};

use weave_stack::ensure_sufficient_stack;

use super::{ArrayDim, TypePattern};
use crate::{Qualifiers, ELLIPSIS, WILDCARD};

impl TypePattern {
    /// Print this type as a declaration of `name`, or as an abstract
    /// declaration when `name` is `None`.
    pub fn write_declaration(&self, out: &mut String, name: Option<&str>) {
        self.write_decl(out, name, false);
    }

    fn write_decl(&self, out: &mut String, inner: Option<&str>, prefix: bool) {
        ensure_sufficient_stack(|| match self {
            TypePattern::Undefined => match inner {
                Some(inner) => out.push_str(inner),
                None => out.push_str("<undefined>"),
            },
            TypePattern::Any { quals } => {
                write_leaf(out, *quals, &WILDCARD.to_string(), inner);
            }
            TypePattern::Primitive { kind, quals } => {
                write_leaf(out, *quals, kind.spelling(), inner);
            }
            TypePattern::Named { name, quals } => {
                write_leaf(out, *quals, &name.to_string(), inner);
            }
            TypePattern::Pointer { pointee, quals } => {
                let declarator = pointer_declarator("*", *quals, inner);
                pointee.write_decl(out, Some(&declarator), true);
            }
            TypePattern::MemberPointer {
                scope,
                pointee,
                quals,
            } => {
                let declarator = pointer_declarator(&format!("{scope}*"), *quals, inner);
                pointee.write_decl(out, Some(&declarator), true);
            }
            TypePattern::Reference { referent } => {
                let declarator = format!("&{}", inner.unwrap_or_default());
                referent.write_decl(out, Some(&declarator), true);
            }
            TypePattern::Array { element, dim } => {
                let mut declarator = wrap_inner(inner, prefix);
                match dim {
                    ArrayDim::Any => {
                        let _ = write!(declarator, "[{WILDCARD}]");
                    }
                    ArrayDim::Fixed(n) => {
                        let _ = write!(declarator, "[{n}]");
                    }
                }
                element.write_decl(out, Some(&declarator), false);
            }
            TypePattern::Function {
                ret,
                params,
                variadic,
                quals,
            } => {
                let mut declarator = wrap_inner(inner, prefix);
                declarator.push('(');
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        declarator.push_str(", ");
                    }
                    param.write_decl(&mut declarator, None, false);
                }
                if *variadic {
                    if !params.is_empty() {
                        declarator.push_str(", ");
                    }
                    declarator.push_str(ELLIPSIS);
                }
                declarator.push(')');
                if !quals.is_empty() {
                    let _ = write!(declarator, " {quals}");
                }
                ret.write_decl(out, Some(&declarator), false);
            }
        });
    }
}

/// `[quals ]spelling[ inner]`
fn write_leaf(out: &mut String, quals: Qualifiers, spelling: &str, inner: Option<&str>) {
    if !quals.is_empty() {
        let _ = write!(out, "{quals} ");
    }
    out.push_str(spelling);
    if let Some(inner) = inner {
        out.push(' ');
        out.push_str(inner);
    }
}

/// `op[ quals][ inner]`, with a separating blank only where needed.
fn pointer_declarator(op: &str, quals: Qualifiers, inner: Option<&str>) -> String {
    let mut declarator = String::from(op);
    if !quals.is_empty() {
        let _ = write!(declarator, " {quals}");
        if inner.is_some() {
            declarator.push(' ');
        }
    }
    if let Some(inner) = inner {
        declarator.push_str(inner);
    }
    declarator
}

fn wrap_inner(inner: Option<&str>, prefix: bool) -> String {
    match inner {
        Some(inner) if prefix => format!("({inner})"),
        Some(inner) => inner.to_string(),
        None => String::new(),
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_declaration(&mut out, None);
        f.write_str(&out)
    }
}
