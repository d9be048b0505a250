//! Pattern data model for join-point signature matching.
//!
//! Everything an aspect weaver needs to describe the *shape* of a C++
//! declaration lives here: qualified names with wildcard components,
//! template-argument patterns, and the type-pattern tree built from
//! primitive, named and declarator nodes.
//!
//! The same types describe both sides of a match. A *pattern* may contain
//! wildcards (`%`, `...`, [`TypePattern::Any`], [`TemplateArg::Any`]); a
//! *concrete* signature built from a real declaration never does. Matching
//! is always asked of the pattern side: `pattern.matches(&concrete)`.
//!
//! # Layout
//!
//! - [`Qualifiers`]: `const`/`volatile` and the one-directional qualifier rule
//! - [`Specifiers`]: `virtual`/`static`
//! - [`NamePattern`]: one identifier with `%` wildcards
//! - [`QualifiedName`]: scopes plus an identifier, operator or conversion target
//! - [`TemplateArgList`]: template argument patterns
//! - [`TypePattern`]: the type tree, its printer, mangler and parameter adjustment

mod name;
mod name_pattern;
mod operator;
mod qualifiers;
mod specifiers;
mod template_arg;
mod ty;

pub use name::{NameTerminal, QualifiedName, Scope};
pub use name_pattern::NamePattern;
pub use operator::OperatorKind;
pub use qualifiers::Qualifiers;
pub use specifiers::Specifiers;
pub use template_arg::{TemplateArg, TemplateArgList};
pub use ty::{Adjustments, ArrayDim, PrimitiveKind, TypePattern};

/// The wildcard character: any identifier run, any type, any array size.
pub const WILDCARD: char = '%';

/// Spelling of the scope ellipsis and the "any remaining arguments" marker.
pub const ELLIPSIS: &str = "...";

/// Token naming an anonymous namespace.
pub const UNNAMED_SCOPE: &str = "<unnamed>";
