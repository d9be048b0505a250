use std::mem;

use bitflags::bitflags;
use weave_stack::ensure_sufficient_stack;

use super::TypePattern;
use crate::Qualifiers;

bitflags! {
    /// Parameter adjustments applied by [`TypePattern::adjust_params`].
    ///
    /// Callers report these as warnings: the user wrote a parameter type
    /// that a function can never actually have.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Adjustments: u8 {
        /// A function-typed parameter became a pointer to function.
        const FUNCTION_TO_POINTER = 1 << 0;
        /// An array-typed parameter became a pointer to its element.
        const ARRAY_TO_POINTER = 1 << 1;
        /// A top-level cv-qualifier was removed from a parameter.
        const QUALIFIER_DROPPED = 1 << 2;
        /// `(void)` was rewritten to `()`.
        const VOID_PARAMETER_LIST = 1 << 3;
    }
}

impl Adjustments {
    /// Human-readable description of each applied adjustment.
    pub fn descriptions(self) -> impl Iterator<Item = &'static str> {
        [
            (
                Adjustments::FUNCTION_TO_POINTER,
                "function parameter adjusted to pointer to function",
            ),
            (
                Adjustments::ARRAY_TO_POINTER,
                "array parameter adjusted to pointer to element",
            ),
            (
                Adjustments::QUALIFIER_DROPPED,
                "top-level qualifier removed from parameter",
            ),
            (
                Adjustments::VOID_PARAMETER_LIST,
                "parameter list '(void)' rewritten to '()'",
            ),
        ]
        .into_iter()
        .filter(move |(flag, _)| self.contains(*flag))
        .map(|(_, text)| text)
    }
}

impl TypePattern {
    /// Apply the function parameter adjustments of the language to every
    /// function node in this tree, including return types and the
    /// parameters of parameters.
    ///
    /// Per parameter, in order: a function type decays to a pointer to
    /// function, an array type decays to a pointer to its element, and
    /// otherwise any top-level qualifier is dropped. A list consisting of a
    /// single `void` parameter becomes empty.
    pub fn adjust_params(&mut self) -> Adjustments {
        let mut applied = Adjustments::empty();
        self.adjust_into(&mut applied);
        applied
    }

    fn adjust_into(&mut self, applied: &mut Adjustments) {
        ensure_sufficient_stack(|| match self {
            TypePattern::Pointer { pointee, .. } | TypePattern::MemberPointer { pointee, .. } => {
                pointee.adjust_into(applied);
            }
            TypePattern::Reference { referent } => referent.adjust_into(applied),
            TypePattern::Array { element, .. } => element.adjust_into(applied),
            TypePattern::Function { ret, params, .. } => {
                ret.adjust_into(applied);
                for param in params.iter_mut() {
                    param.adjust_into(applied);
                    adjust_param(param, applied);
                }
                if params.len() == 1 && params[0].is_void() {
                    params.clear();
                    *applied |= Adjustments::VOID_PARAMETER_LIST;
                }
            }
            TypePattern::Undefined
            | TypePattern::Any { .. }
            | TypePattern::Primitive { .. }
            | TypePattern::Named { .. } => {}
        });
    }
}

fn adjust_param(param: &mut TypePattern, applied: &mut Adjustments) {
    if param.is_function() {
        param.make_pointer();
        *applied |= Adjustments::FUNCTION_TO_POINTER;
        return;
    }

    if let TypePattern::Array { element, .. } = param {
        let element = mem::take(element.as_mut());
        *param = element.into_pointer();
        *applied |= Adjustments::ARRAY_TO_POINTER;
        return;
    }

    if let Some(quals) = param.qualifiers_mut() {
        if !quals.is_empty() {
            *quals = Qualifiers::empty();
            *applied |= Adjustments::QUALIFIER_DROPPED;
        }
    }
}
