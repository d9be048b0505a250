//! The type-pattern tree.
//!
//! A [`TypePattern`] is built bottom-up: the parser starts from the type
//! named by the declaration specifiers and wraps it once per declarator
//! (`make_pointer`, `make_function`, ...). Compound variants own exactly one
//! child; a function additionally owns its parameter types.

mod adjust;
mod mangle;
mod matching;
mod print;

use std::mem;

pub use adjust::Adjustments;

use crate::{QualifiedName, Qualifiers};

/// Built-in arithmetic and `void` types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PrimitiveKind {
    Bool,
    Char,
    SignedChar,
    UnsignedChar,
    WChar,
    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,
    LongLong,
    UnsignedLongLong,
    Int128,
    UnsignedInt128,
    Float,
    Double,
    LongDouble,
    Void,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 19] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Char,
        PrimitiveKind::SignedChar,
        PrimitiveKind::UnsignedChar,
        PrimitiveKind::WChar,
        PrimitiveKind::Short,
        PrimitiveKind::UnsignedShort,
        PrimitiveKind::Int,
        PrimitiveKind::UnsignedInt,
        PrimitiveKind::Long,
        PrimitiveKind::UnsignedLong,
        PrimitiveKind::LongLong,
        PrimitiveKind::UnsignedLongLong,
        PrimitiveKind::Int128,
        PrimitiveKind::UnsignedInt128,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::LongDouble,
        PrimitiveKind::Void,
    ];

    /// Canonical source spelling.
    pub fn spelling(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
            PrimitiveKind::SignedChar => "signed char",
            PrimitiveKind::UnsignedChar => "unsigned char",
            PrimitiveKind::WChar => "wchar_t",
            PrimitiveKind::Short => "short",
            PrimitiveKind::UnsignedShort => "unsigned short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::UnsignedInt => "unsigned int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::UnsignedLong => "unsigned long",
            PrimitiveKind::LongLong => "long long",
            PrimitiveKind::UnsignedLongLong => "unsigned long long",
            PrimitiveKind::Int128 => "__int128",
            PrimitiveKind::UnsignedInt128 => "unsigned __int128",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::LongDouble => "long double",
            PrimitiveKind::Void => "void",
        }
    }

    /// Itanium builtin type code.
    pub fn mangled(self) -> char {
        match self {
            PrimitiveKind::Bool => 'b',
            PrimitiveKind::Char => 'c',
            PrimitiveKind::SignedChar => 'a',
            PrimitiveKind::UnsignedChar => 'h',
            PrimitiveKind::WChar => 'w',
            PrimitiveKind::Short => 's',
            PrimitiveKind::UnsignedShort => 't',
            PrimitiveKind::Int => 'i',
            PrimitiveKind::UnsignedInt => 'j',
            PrimitiveKind::Long => 'l',
            PrimitiveKind::UnsignedLong => 'm',
            PrimitiveKind::LongLong => 'x',
            PrimitiveKind::UnsignedLongLong => 'y',
            PrimitiveKind::Int128 => 'n',
            PrimitiveKind::UnsignedInt128 => 'o',
            PrimitiveKind::Float => 'f',
            PrimitiveKind::Double => 'd',
            PrimitiveKind::LongDouble => 'e',
            PrimitiveKind::Void => 'v',
        }
    }
}

/// Array bound.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArrayDim {
    /// `[%]`: any bound.
    Any,
    Fixed(u64),
}

/// A node of the type-pattern tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypePattern {
    /// No type could be formed. Matches only itself.
    #[default]
    Undefined,
    /// `%`: any type whose qualifiers satisfy `quals`.
    Any { quals: Qualifiers },
    Primitive {
        kind: PrimitiveKind,
        quals: Qualifiers,
    },
    /// A class, enum or typedef name.
    Named {
        name: QualifiedName,
        quals: Qualifiers,
    },
    Pointer {
        pointee: Box<TypePattern>,
        quals: Qualifiers,
    },
    /// `T C::*`; `scope` holds the class as a scope-only name.
    MemberPointer {
        scope: QualifiedName,
        pointee: Box<TypePattern>,
        quals: Qualifiers,
    },
    Reference { referent: Box<TypePattern> },
    Array {
        element: Box<TypePattern>,
        dim: ArrayDim,
    },
    Function {
        ret: Box<TypePattern>,
        params: Vec<TypePattern>,
        variadic: bool,
        quals: Qualifiers,
    },
}

impl TypePattern {
    // === Constructors ===

    pub fn any() -> Self {
        TypePattern::Any {
            quals: Qualifiers::empty(),
        }
    }

    pub fn primitive(kind: PrimitiveKind) -> Self {
        TypePattern::Primitive {
            kind,
            quals: Qualifiers::empty(),
        }
    }

    pub fn named(name: QualifiedName) -> Self {
        TypePattern::Named {
            name,
            quals: Qualifiers::empty(),
        }
    }

    #[must_use]
    pub fn into_pointer(self) -> Self {
        TypePattern::Pointer {
            pointee: Box::new(self),
            quals: Qualifiers::empty(),
        }
    }

    #[must_use]
    pub fn into_member_pointer(self, scope: QualifiedName) -> Self {
        TypePattern::MemberPointer {
            scope,
            pointee: Box::new(self),
            quals: Qualifiers::empty(),
        }
    }

    #[must_use]
    pub fn into_reference(self) -> Self {
        TypePattern::Reference {
            referent: Box::new(self),
        }
    }

    #[must_use]
    pub fn into_array(self, dim: ArrayDim) -> Self {
        TypePattern::Array {
            element: Box::new(self),
            dim,
        }
    }

    /// A function returning `self`.
    #[must_use]
    pub fn into_function(self, params: Vec<TypePattern>, variadic: bool) -> Self {
        TypePattern::Function {
            ret: Box::new(self),
            params,
            variadic,
            quals: Qualifiers::empty(),
        }
    }

    /// Add qualifiers; ignored for references, arrays and `Undefined`.
    #[must_use]
    pub fn with_qualifiers(mut self, quals: Qualifiers) -> Self {
        self.qualify(quals);
        self
    }

    // === In-place wrapping, used while parsing declarators ===

    pub fn make_pointer(&mut self) {
        *self = mem::take(self).into_pointer();
    }

    pub fn make_member_pointer(&mut self, scope: QualifiedName) {
        *self = mem::take(self).into_member_pointer(scope);
    }

    pub fn make_reference(&mut self) {
        *self = mem::take(self).into_reference();
    }

    pub fn make_array(&mut self, dim: ArrayDim) {
        *self = mem::take(self).into_array(dim);
    }

    pub fn make_function(&mut self, params: Vec<TypePattern>, variadic: bool) {
        *self = mem::take(self).into_function(params, variadic);
    }

    // === Queries ===

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, TypePattern::Undefined)
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, TypePattern::Any { .. })
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self, TypePattern::Function { .. })
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(
            self,
            TypePattern::Primitive {
                kind: PrimitiveKind::Void,
                ..
            }
        )
    }

    /// Qualifiers of this node, or `None` if it cannot carry any.
    pub fn qualifiers(&self) -> Option<Qualifiers> {
        match self {
            TypePattern::Any { quals }
            | TypePattern::Primitive { quals, .. }
            | TypePattern::Named { quals, .. }
            | TypePattern::Pointer { quals, .. }
            | TypePattern::MemberPointer { quals, .. }
            | TypePattern::Function { quals, .. } => Some(*quals),
            TypePattern::Undefined | TypePattern::Reference { .. } | TypePattern::Array { .. } => {
                None
            }
        }
    }

    pub fn qualifiers_mut(&mut self) -> Option<&mut Qualifiers> {
        match self {
            TypePattern::Any { quals }
            | TypePattern::Primitive { quals, .. }
            | TypePattern::Named { quals, .. }
            | TypePattern::Pointer { quals, .. }
            | TypePattern::MemberPointer { quals, .. }
            | TypePattern::Function { quals, .. } => Some(quals),
            TypePattern::Undefined | TypePattern::Reference { .. } | TypePattern::Array { .. } => {
                None
            }
        }
    }

    /// Add qualifiers if this node is qualifiable. Returns whether it was.
    pub fn qualify(&mut self, add: Qualifiers) -> bool {
        match self.qualifiers_mut() {
            Some(quals) => {
                *quals |= add;
                true
            }
            None => false,
        }
    }

    /// The single owned child of a declarator node.
    pub fn child(&self) -> Option<&TypePattern> {
        match self {
            TypePattern::Pointer { pointee, .. } | TypePattern::MemberPointer { pointee, .. } => {
                Some(pointee)
            }
            TypePattern::Reference { referent } => Some(referent),
            TypePattern::Array { element, .. } => Some(element),
            TypePattern::Function { ret, .. } => Some(ret),
            _ => None,
        }
    }

    /// Will this pattern select at most one type? Only a named type with a
    /// trivial name qualifies.
    pub fn is_trivial_match(&self) -> bool {
        match self {
            TypePattern::Named { name, .. } => name.is_trivial(),
            _ => false,
        }
    }
}
