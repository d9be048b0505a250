use weave_stack::ensure_sufficient_stack;

use super::{ArrayDim, TypePattern};

impl TypePattern {
    /// Does the concrete type `concrete` satisfy this pattern?
    ///
    /// Nodes match when they are the same variant, their qualifiers satisfy
    /// the one-directional qualifier rule and their children match. `Any`
    /// only checks qualifiers.
    pub fn matches(&self, concrete: &TypePattern) -> bool {
        ensure_sufficient_stack(|| self.matches_node(concrete))
    }

    fn matches_node(&self, concrete: &TypePattern) -> bool {
        match (self, concrete) {
            (TypePattern::Any { quals }, _) => quals.satisfied_by(concrete.qualifiers()),
            (TypePattern::Undefined, TypePattern::Undefined) => true,
            (
                TypePattern::Primitive { kind, quals },
                TypePattern::Primitive {
                    kind: concrete_kind,
                    quals: concrete_quals,
                },
            ) => kind == concrete_kind && quals.satisfied_by(Some(*concrete_quals)),
            (
                TypePattern::Named { name, quals },
                TypePattern::Named {
                    name: concrete_name,
                    quals: concrete_quals,
                },
            ) => quals.satisfied_by(Some(*concrete_quals)) && name.matches(concrete_name),
            (
                TypePattern::Pointer { pointee, quals },
                TypePattern::Pointer {
                    pointee: concrete_pointee,
                    quals: concrete_quals,
                },
            ) => quals.satisfied_by(Some(*concrete_quals)) && pointee.matches(concrete_pointee),
            (
                TypePattern::MemberPointer {
                    scope,
                    pointee,
                    quals,
                },
                TypePattern::MemberPointer {
                    scope: concrete_scope,
                    pointee: concrete_pointee,
                    quals: concrete_quals,
                },
            ) => {
                quals.satisfied_by(Some(*concrete_quals))
                    && scope.matches(concrete_scope)
                    && pointee.matches(concrete_pointee)
            }
            (
                TypePattern::Reference { referent },
                TypePattern::Reference {
                    referent: concrete_referent,
                },
            ) => referent.matches(concrete_referent),
            (
                TypePattern::Array { element, dim },
                TypePattern::Array {
                    element: concrete_element,
                    dim: concrete_dim,
                },
            ) => {
                (*dim == ArrayDim::Any || dim == concrete_dim) && element.matches(concrete_element)
            }
            (
                TypePattern::Function {
                    ret,
                    params,
                    variadic,
                    quals,
                },
                TypePattern::Function {
                    ret: concrete_ret,
                    params: concrete_params,
                    quals: concrete_quals,
                    ..
                },
            ) => {
                if !quals.satisfied_by(Some(*concrete_quals)) {
                    return false;
                }
                // A variadic pattern lists a prefix of the concrete parameters.
                let arity_ok = if *variadic {
                    params.len() <= concrete_params.len()
                } else {
                    params.len() == concrete_params.len()
                };
                arity_ok
                    && params
                        .iter()
                        .zip(concrete_params)
                        .all(|(param, concrete_param)| param.matches(concrete_param))
                    && ret.matches(concrete_ret)
            }
            _ => false,
        }
    }
}
