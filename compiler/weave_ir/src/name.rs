//! Qualified name patterns and their scope matcher.

use std::fmt;

use smallvec::SmallVec;
use weave_stack::ensure_sufficient_stack;

use crate::{NamePattern, OperatorKind, TemplateArgList, TypePattern, ELLIPSIS, UNNAMED_SCOPE};

/// Itanium spelling of the first anonymous namespace.
const UNNAMED_MANGLED: &str = "_GLOBAL__N_1";

/// One component of a qualified name's scope prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    /// `...::` matches any number of enclosing scopes, including none.
    Ellipsis,
    /// A namespace or class, optionally a template specialization.
    Named {
        name: NamePattern,
        template_args: Option<TemplateArgList>,
    },
}

impl Scope {
    pub fn named(name: impl Into<NamePattern>) -> Self {
        Scope::Named {
            name: name.into(),
            template_args: None,
        }
    }

    pub fn specialized(name: impl Into<NamePattern>, template_args: TemplateArgList) -> Self {
        Scope::Named {
            name: name.into(),
            template_args: Some(template_args),
        }
    }

    fn text(&self) -> &str {
        match self {
            Scope::Ellipsis => ELLIPSIS,
            Scope::Named { name, .. } => name.as_str(),
        }
    }

    /// Match a non-ellipsis pattern scope against one concrete scope.
    fn matches_one(&self, concrete: &Scope) -> bool {
        let Scope::Named {
            name,
            template_args,
        } = self
        else {
            return true;
        };
        if let Some(pattern_args) = template_args {
            match concrete {
                Scope::Named {
                    template_args: Some(concrete_args),
                    ..
                } if pattern_args.matches(concrete_args) => {}
                _ => return false,
            }
        }
        name.matches(concrete.text())
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Ellipsis => f.write_str(ELLIPSIS),
            Scope::Named {
                name,
                template_args,
            } => {
                write!(f, "{name}")?;
                if let Some(args) = template_args {
                    write!(f, "{args}")?;
                }
                Ok(())
            }
        }
    }
}

/// What a qualified name ends in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NameTerminal {
    /// Scope prefix only, as in the class part of `int A::*`.
    #[default]
    None,
    /// An identifier, optionally with template arguments.
    Ident {
        name: NamePattern,
        template_args: Option<TemplateArgList>,
    },
    /// `operator +`, `operator new[]`, or `operator %` for any operator.
    Operator(OperatorKind),
    /// A conversion function, `operator int`.
    Conversion(Box<TypePattern>),
}

/// A possibly scoped name: `A::B<int>::f`, `...::operator ==`, `%`.
///
/// Scopes are stored outermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    scopes: SmallVec<[Scope; 2]>,
    terminal: NameTerminal,
}

impl QualifiedName {
    pub fn new() -> Self {
        QualifiedName::default()
    }

    /// An unscoped identifier.
    pub fn ident(name: impl Into<NamePattern>) -> Self {
        let mut qualified = QualifiedName::new();
        qualified.set_ident(name, None);
        qualified
    }

    /// Wrap the name in an enclosing scope, so that
    /// `ident("f").in_scope(b).in_scope(a)` spells `a::b::f`.
    #[must_use]
    pub fn in_scope(mut self, scope: Scope) -> Self {
        self.scopes.insert(0, scope);
        self
    }

    pub fn push_scope(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    pub fn set_ident(&mut self, name: impl Into<NamePattern>, template_args: Option<TemplateArgList>) {
        self.terminal = NameTerminal::Ident {
            name: name.into(),
            template_args,
        };
    }

    pub fn set_operator(&mut self, op: OperatorKind) {
        self.terminal = NameTerminal::Operator(op);
    }

    pub fn set_conversion(&mut self, target: TypePattern) {
        self.terminal = NameTerminal::Conversion(Box::new(target));
    }

    /// Attach template arguments to an identifier terminal.
    ///
    /// Returns `false` (and leaves the name unchanged) for other terminals.
    pub fn set_template_args(&mut self, args: TemplateArgList) -> bool {
        match &mut self.terminal {
            NameTerminal::Ident { template_args, .. } => {
                *template_args = Some(args);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    #[inline]
    pub fn terminal(&self) -> &NameTerminal {
        &self.terminal
    }

    /// No scopes and no terminal.
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty() && matches!(self.terminal, NameTerminal::None)
    }

    /// The identifier text, if the name ends in one.
    pub fn ident_str(&self) -> Option<&str> {
        match &self.terminal {
            NameTerminal::Ident { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    /// Match this pattern against a concrete name.
    ///
    /// Scopes are compared innermost first, then the terminal selected by
    /// what the concrete name ends in.
    pub fn matches(&self, concrete: &QualifiedName) -> bool {
        if !match_scopes(&self.scopes, &concrete.scopes) {
            return false;
        }
        match &concrete.terminal {
            NameTerminal::Operator(op) => self.operator_matches(*op),
            NameTerminal::Conversion(target) => self.conversion_matches(target),
            NameTerminal::Ident {
                name,
                template_args,
            } => match &self.terminal {
                NameTerminal::Ident {
                    name: pattern,
                    template_args: pattern_args,
                } => {
                    if let Some(pattern_args) = pattern_args {
                        match template_args {
                            Some(args) if pattern_args.matches(args) => {}
                            _ => return false,
                        }
                    }
                    pattern.matches(name.as_str())
                }
                _ => false,
            },
            NameTerminal::None => matches!(self.terminal, NameTerminal::None),
        }
    }

    fn operator_matches(&self, op: OperatorKind) -> bool {
        match &self.terminal {
            // A plain `%` identifier also selects operator functions.
            NameTerminal::Ident { name, .. } => name.is_any(),
            NameTerminal::Operator(OperatorKind::Any) => true,
            NameTerminal::Operator(pattern) => *pattern == op,
            NameTerminal::Conversion(_) | NameTerminal::None => false,
        }
    }

    fn conversion_matches(&self, target: &TypePattern) -> bool {
        match &self.terminal {
            NameTerminal::Ident { name, .. } => name.is_any(),
            NameTerminal::Operator(op) => *op == OperatorKind::Any,
            NameTerminal::Conversion(pattern) => {
                !pattern.is_undefined() && !target.is_undefined() && pattern.matches(target)
            }
            NameTerminal::None => false,
        }
    }

    /// Will this pattern match at most one entity?
    ///
    /// False when any component carries a wildcard, a scope ellipsis or
    /// template arguments.
    pub fn is_trivial(&self) -> bool {
        let scopes_trivial = self.scopes.iter().all(|scope| match scope {
            Scope::Ellipsis => false,
            Scope::Named {
                name,
                template_args,
            } => !name.has_wildcard() && template_args.is_none(),
        });
        let terminal_trivial = match &self.terminal {
            NameTerminal::Ident {
                name,
                template_args,
            } => !name.has_wildcard() && template_args.is_none(),
            NameTerminal::Operator(op) => *op != OperatorKind::Any,
            NameTerminal::Conversion(_) | NameTerminal::None => true,
        };
        scopes_trivial && terminal_trivial
    }

    /// Append the mangled form: `<len><id>` or `N<scopes><id>E`.
    pub fn mangle(&self, out: &mut String) {
        if self.scopes.is_empty() {
            self.mangle_terminal(out);
            return;
        }
        out.push('N');
        for scope in &self.scopes {
            mangle_scope(scope, out);
        }
        self.mangle_terminal(out);
        out.push('E');
    }

    /// Mangle a scope-only name as the class it denotes, as needed for
    /// the class part of a member pointer.
    pub(crate) fn mangle_as_class(&self, out: &mut String) {
        if !matches!(self.terminal, NameTerminal::None) {
            self.mangle(out);
            return;
        }
        match self.scopes.as_slice() {
            [] => {}
            [only] => mangle_scope(only, out),
            scopes => {
                out.push('N');
                for scope in scopes {
                    mangle_scope(scope, out);
                }
                out.push('E');
            }
        }
    }

    fn mangle_terminal(&self, out: &mut String) {
        match &self.terminal {
            NameTerminal::None => {}
            NameTerminal::Ident {
                name,
                template_args,
            } => {
                mangle_source_name(name.as_str(), out);
                if let Some(args) = template_args {
                    args.mangle(out);
                }
            }
            NameTerminal::Operator(op) => out.push_str(op.mangled()),
            NameTerminal::Conversion(target) => {
                out.push_str("cv");
                target.mangle(out);
            }
        }
    }
}

/// Match pattern scopes against concrete scopes, both outermost first.
///
/// The innermost components are compared first. A `...` that is the
/// outermost pattern component accepts whatever is left. A `...` further
/// in is tried against every split of the remaining concrete scopes, from
/// absorbing nothing to leaving a single outer scope for the rest of the
/// pattern.
fn match_scopes(pattern: &[Scope], concrete: &[Scope]) -> bool {
    ensure_sufficient_stack(|| {
        let Some((innermost, outer_pattern)) = pattern.split_last() else {
            return concrete.is_empty();
        };

        if matches!(innermost, Scope::Ellipsis) {
            if outer_pattern.is_empty() {
                return true;
            }
            return (0..=concrete.len())
                .rev()
                .any(|keep| match_scopes(outer_pattern, &concrete[..keep]));
        }

        match concrete.split_last() {
            Some((current, outer_concrete)) => {
                innermost.matches_one(current) && match_scopes(outer_pattern, outer_concrete)
            }
            None => false,
        }
    })
}

fn mangle_scope(scope: &Scope, out: &mut String) {
    match scope {
        Scope::Ellipsis => mangle_source_name(ELLIPSIS, out),
        Scope::Named {
            name,
            template_args,
        } => {
            let text = name.as_str();
            if text == UNNAMED_SCOPE {
                mangle_source_name(UNNAMED_MANGLED, out);
            } else {
                mangle_source_name(text, out);
            }
            if let Some(args) = template_args {
                args.mangle(out);
            }
        }
    }
}

fn mangle_source_name(name: &str, out: &mut String) {
    out.push_str(&name.len().to_string());
    out.push_str(name);
}

impl QualifiedName {
    /// Display the name as a match expression spells it, with `operator %%`
    /// for modulo.
    pub fn as_pattern(&self) -> impl fmt::Display + '_ {
        PatternSpelling(self)
    }

    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        spell: fn(OperatorKind) -> &'static str,
    ) -> fmt::Result {
        for scope in &self.scopes {
            write!(f, "{scope}::")?;
        }
        match &self.terminal {
            NameTerminal::None => Ok(()),
            NameTerminal::Ident {
                name,
                template_args,
            } => {
                write!(f, "{name}")?;
                if let Some(args) = template_args {
                    write!(f, "{args}")?;
                }
                Ok(())
            }
            NameTerminal::Operator(op) => write!(f, "operator {}", spell(*op)),
            NameTerminal::Conversion(target) => write!(f, "operator {target}"),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, OperatorKind::spelling)
    }
}

struct PatternSpelling<'a>(&'a QualifiedName);

impl fmt::Display for PatternSpelling<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write(f, OperatorKind::pattern_spelling)
    }
}
