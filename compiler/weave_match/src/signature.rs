//! The top-level signature: kind, name, type and specifiers.

use std::fmt;

use tracing::{debug, instrument};
use weave_ir::{Adjustments, QualifiedName, Specifiers, TypePattern};
use weave_parse::{parse_declaration, Declaration, ParseError, ParseErrorKind, ParserConfig};

use crate::SignatureError;

/// What a signature describes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    /// A bare type, `const char *`.
    #[default]
    Type,
    /// A named function, `int C::f(char)`.
    Function,
    /// A named object or data member, `int C::count`.
    Attribute,
}

impl SignatureKind {
    fn of(name: Option<&QualifiedName>, ty: &TypePattern) -> Self {
        match name {
            None => SignatureKind::Type,
            Some(_) if ty.is_function() => SignatureKind::Function,
            Some(_) => SignatureKind::Attribute,
        }
    }

    /// Does this kind carry a declarator name?
    pub fn is_named(self) -> bool {
        !matches!(self, SignatureKind::Type)
    }
}

impl fmt::Display for SignatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignatureKind::Type => "type",
            SignatureKind::Function => "function",
            SignatureKind::Attribute => "attribute",
        })
    }
}

/// Lifecycle of a signature.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PatternState {
    /// Created, nothing parsed yet.
    #[default]
    New,
    Normal,
    /// The last parse failed. The signature never matches.
    Error(ParseErrorKind),
}

/// A parsed match expression or concrete signature.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Signature {
    config: ParserConfig,
    state: PatternState,
    kind: SignatureKind,
    name: Option<QualifiedName>,
    ty: TypePattern,
    specifiers: Specifiers,
    adjustments: Adjustments,
}

impl Signature {
    /// An unparsed signature that will parse with `config`.
    pub fn new(config: ParserConfig) -> Self {
        Signature {
            config,
            ..Signature::default()
        }
    }

    /// Parse a match expression (wildcards allowed).
    pub fn pattern(text: &str) -> Result<Self, ParseError> {
        let mut signature = Signature::new(ParserConfig::pattern());
        signature.parse(text)?;
        Ok(signature)
    }

    /// Parse a concrete signature (wildcards rejected).
    pub fn concrete(text: &str) -> Result<Self, ParseError> {
        let mut signature = Signature::new(ParserConfig::concrete());
        signature.parse(text)?;
        Ok(signature)
    }

    /// Build a signature from an already constructed declaration, as a host
    /// toolchain does for real entities.
    ///
    /// The kind follows from `name` and `ty`; parameter adjustments are
    /// applied as if the declaration had been parsed.
    pub fn declared(name: Option<QualifiedName>, ty: TypePattern) -> Self {
        let mut signature = Signature::new(ParserConfig::concrete());
        signature.accept(Declaration {
            ty,
            name,
            specifiers: Specifiers::empty(),
        });
        signature
    }

    /// Parse `text`, replacing whatever this signature held before.
    ///
    /// On failure the signature enters the error state and stops matching.
    #[instrument(level = "debug", skip(self))]
    pub fn parse(&mut self, text: &str) -> Result<(), ParseError> {
        *self = Signature::new(self.config);
        match parse_declaration(text, self.config) {
            Ok(declaration) => {
                self.accept(declaration);
                debug!(kind = %self.kind, "parsed");
                Ok(())
            }
            Err(error) => {
                debug!(%error, "parse failed");
                self.state = PatternState::Error(error.kind);
                Err(error)
            }
        }
    }

    fn accept(&mut self, declaration: Declaration) {
        let Declaration {
            mut ty,
            name,
            specifiers,
        } = declaration;
        let adjustments = ty.adjust_params();
        if !adjustments.is_empty() {
            debug!(
                adjustments = ?adjustments.descriptions().collect::<Vec<_>>(),
                "parameter types adjusted"
            );
        }
        self.kind = SignatureKind::of(name.as_ref(), &ty);
        self.name = name;
        self.ty = ty;
        self.specifiers = specifiers;
        self.adjustments = adjustments;
        self.state = PatternState::Normal;
    }

    /// Mark a function signature as virtual.
    pub fn declare_virtual_function(&mut self) -> Result<(), SignatureError> {
        self.require_valid()?;
        if self.kind != SignatureKind::Function {
            return Err(SignatureError::VirtualNonFunction);
        }
        if self.specifiers.contains(Specifiers::STATIC) {
            return Err(SignatureError::VirtualStaticConflict);
        }
        self.specifiers |= Specifiers::VIRTUAL;
        Ok(())
    }

    /// Mark a function or attribute signature as static.
    pub fn declare_static(&mut self) -> Result<(), SignatureError> {
        self.require_valid()?;
        if !self.kind.is_named() {
            return Err(SignatureError::StaticType);
        }
        if self.specifiers.contains(Specifiers::VIRTUAL) {
            return Err(SignatureError::VirtualStaticConflict);
        }
        self.specifiers |= Specifiers::STATIC;
        Ok(())
    }

    fn require_valid(&self) -> Result<(), SignatureError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SignatureError::Invalid)
        }
    }

    // === Queries ===

    #[inline]
    pub fn state(&self) -> PatternState {
        self.state
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.state == PatternState::Normal
    }

    /// The error of the last failed parse.
    pub fn error(&self) -> Option<ParseErrorKind> {
        match self.state {
            PatternState::Error(kind) => Some(kind),
            PatternState::New | PatternState::Normal => None,
        }
    }

    #[inline]
    pub fn config(&self) -> ParserConfig {
        self.config
    }

    #[inline]
    pub fn kind(&self) -> SignatureKind {
        self.kind
    }

    #[inline]
    pub fn name(&self) -> Option<&QualifiedName> {
        self.name.as_ref()
    }

    #[inline]
    pub fn ty(&self) -> &TypePattern {
        &self.ty
    }

    #[inline]
    pub fn specifiers(&self) -> Specifiers {
        self.specifiers
    }

    pub fn is_virtual(&self) -> bool {
        self.specifiers.contains(Specifiers::VIRTUAL)
    }

    /// Static only applies to functions and attributes.
    pub fn is_static(&self) -> bool {
        self.kind.is_named() && self.specifiers.contains(Specifiers::STATIC)
    }

    /// Parameter adjustments the last parse applied.
    #[inline]
    pub fn adjustments(&self) -> Adjustments {
        self.adjustments
    }

    /// Will this pattern select at most one entity?
    ///
    /// Types defer to [`TypePattern::is_trivial_match`]; named signatures
    /// look at the declarator name only.
    pub fn is_trivial_match(&self) -> bool {
        if !self.is_valid() {
            return false;
        }
        match &self.name {
            None => self.ty.is_trivial_match(),
            Some(name) => name.is_trivial(),
        }
    }

    // === Matching ===

    /// Does `concrete` satisfy this pattern?
    ///
    /// Kinds must agree, except that the bare `%` type pattern matches
    /// every kind. Then the name (for named kinds), the type, and any
    /// `virtual`/`static` the pattern asks for.
    pub fn matches(&self, concrete: &Signature) -> bool {
        debug_assert!(
            self.state != PatternState::New && concrete.state != PatternState::New,
            "matching an unparsed signature"
        );
        if !self.is_valid() || !concrete.is_valid() {
            return false;
        }
        if self.kind != concrete.kind {
            return self.kind == SignatureKind::Type && self.ty == TypePattern::any();
        }
        if self.kind.is_named() {
            match (&self.name, &concrete.name) {
                (Some(pattern), Some(name)) if pattern.matches(name) => {}
                _ => return false,
            }
        }
        if !self.ty.matches(&concrete.ty) {
            return false;
        }
        if self.is_virtual() && !concrete.is_virtual() {
            return false;
        }
        !self.is_static() || concrete.is_static()
    }

    // === Output ===

    /// Canonical mangled form: the type alone for type signatures,
    /// `_Z<name><type>` for named ones.
    pub fn mangled(&self) -> String {
        let mut out = String::new();
        if let Some(name) = &self.name {
            out.push_str("_Z");
            name.mangle(&mut out);
        }
        self.ty.mangle(&mut out);
        out
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            PatternState::New => f.write_str("<unparsed>"),
            PatternState::Error(kind) => write!(f, "<error {}>", kind.code()),
            PatternState::Normal => {
                for keyword in self.specifiers.keywords() {
                    write!(f, "{keyword} ")?;
                }
                let name = self.name.as_ref().map(|name| {
                    if self.config.wildcards_allowed() {
                        name.as_pattern().to_string()
                    } else {
                        name.to_string()
                    }
                });
                let mut out = String::new();
                self.ty.write_declaration(&mut out, name.as_deref());
                f.write_str(&out)
            }
        }
    }
}

#[cfg(test)]
mod tests;
