//! Template argument patterns.

use std::fmt;

use crate::{QualifiedName, TypePattern, ELLIPSIS, WILDCARD};

/// One template argument, either concrete or a wildcard.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TemplateArg {
    /// A type argument: `X<int *>`.
    Type(TypePattern),
    /// An integral value argument: `X<3>`.
    Value(i64),
    /// The address of an object or function: `X<&f>`.
    Address(QualifiedName),
    /// `%`: exactly one argument of any kind.
    Any,
    /// `...`: all remaining arguments.
    Ellipsis,
}

impl TemplateArg {
    /// Match this argument against a concrete one.
    ///
    /// [`TemplateArg::Ellipsis`] is handled by the enclosing list; on its
    /// own it accepts anything.
    pub fn matches(&self, concrete: &TemplateArg) -> bool {
        match (self, concrete) {
            (TemplateArg::Any | TemplateArg::Ellipsis, _) => true,
            (TemplateArg::Type(pattern), TemplateArg::Type(concrete)) => pattern.matches(concrete),
            (TemplateArg::Value(pattern), TemplateArg::Value(concrete)) => pattern == concrete,
            (TemplateArg::Address(pattern), TemplateArg::Address(concrete)) => {
                pattern.matches(concrete)
            }
            _ => false,
        }
    }

    pub(crate) fn mangle(&self, out: &mut String) {
        match self {
            TemplateArg::Type(ty) => ty.mangle(out),
            TemplateArg::Value(value) => {
                out.push_str("Lx");
                if *value < 0 {
                    out.push('n');
                }
                out.push_str(&value.unsigned_abs().to_string());
                out.push('E');
            }
            TemplateArg::Address(name) => {
                out.push('L');
                name.mangle(out);
                out.push('E');
            }
            TemplateArg::Any => out.push_str("_X_"),
            TemplateArg::Ellipsis => out.push_str("_Xz_"),
        }
    }
}

impl fmt::Display for TemplateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateArg::Type(ty) => write!(f, "{ty}"),
            TemplateArg::Value(value) => write!(f, "{value}"),
            TemplateArg::Address(name) => write!(f, "&{name}"),
            TemplateArg::Any => write!(f, "{WILDCARD}"),
            TemplateArg::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

/// An ordered template argument list, `<...>`.
///
/// An [`TemplateArg::Ellipsis`] ends matching early and is only meaningful
/// as the last element.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TemplateArgList {
    args: Vec<TemplateArg>,
}

impl TemplateArgList {
    pub fn new() -> Self {
        TemplateArgList { args: Vec::new() }
    }

    pub fn push(&mut self, arg: TemplateArg) {
        self.args.push(arg);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateArg> {
        self.args.iter()
    }

    /// Pairwise match against a concrete argument list.
    ///
    /// Succeeds as soon as a pattern `...` is reached. Otherwise both lists
    /// must run out together.
    pub fn matches(&self, concrete: &TemplateArgList) -> bool {
        let mut remaining = concrete.args.iter();
        for pattern in &self.args {
            if matches!(pattern, TemplateArg::Ellipsis) {
                return true;
            }
            match remaining.next() {
                Some(arg) if pattern.matches(arg) => {}
                _ => return false,
            }
        }
        remaining.next().is_none()
    }

    pub(crate) fn mangle(&self, out: &mut String) {
        out.push('I');
        for arg in &self.args {
            arg.mangle(out);
        }
        out.push('E');
    }
}

impl From<Vec<TemplateArg>> for TemplateArgList {
    fn from(args: Vec<TemplateArg>) -> Self {
        TemplateArgList { args }
    }
}

impl FromIterator<TemplateArg> for TemplateArgList {
    fn from_iter<I: IntoIterator<Item = TemplateArg>>(iter: I) -> Self {
        TemplateArgList {
            args: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TemplateArgList {
    type Item = &'a TemplateArg;
    type IntoIter = std::slice::Iter<'a, TemplateArg>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

impl fmt::Display for TemplateArgList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(">")
    }
}

#[cfg(test)]
mod tests;
