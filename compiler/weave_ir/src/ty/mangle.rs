use weave_stack::ensure_sufficient_stack;

use super::{ArrayDim, TypePattern};

impl TypePattern {
    /// Compact canonical encoding in the style of the Itanium ABI.
    ///
    /// Distinct patterns get distinct encodings, so the encoding serves as
    /// an identity key. Wildcards use `_X` codes, which no source name can
    /// produce.
    pub fn mangled(&self) -> String {
        let mut out = String::new();
        self.mangle(&mut out);
        out
    }

    pub fn mangle(&self, out: &mut String) {
        ensure_sufficient_stack(|| {
            if let Some(quals) = self.qualifiers() {
                quals.mangle(out);
            }
            match self {
                TypePattern::Undefined => {}
                TypePattern::Any { .. } => out.push_str("_XT_"),
                TypePattern::Primitive { kind, .. } => out.push(kind.mangled()),
                TypePattern::Named { name, .. } => name.mangle(out),
                TypePattern::Pointer { pointee, .. } => {
                    out.push('P');
                    pointee.mangle(out);
                }
                TypePattern::MemberPointer { scope, pointee, .. } => {
                    out.push('M');
                    scope.mangle_as_class(out);
                    pointee.mangle(out);
                }
                TypePattern::Reference { referent } => {
                    out.push('R');
                    referent.mangle(out);
                }
                TypePattern::Array { element, dim } => {
                    out.push('A');
                    if let ArrayDim::Fixed(n) = dim {
                        out.push_str(&n.to_string());
                    }
                    out.push('_');
                    element.mangle(out);
                }
                TypePattern::Function {
                    ret,
                    params,
                    variadic,
                    ..
                } => {
                    out.push('F');
                    ret.mangle(out);
                    if params.is_empty() && !variadic {
                        out.push('v');
                    }
                    for param in params {
                        param.mangle(out);
                    }
                    if *variadic {
                        out.push('z');
                    }
                    out.push('E');
                }
            }
        });
    }
}
