//! `const`/`volatile` qualifier sets.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// cv-qualifiers carried by a type pattern node.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 1 << 0;
        const VOLATILE = 1 << 1;
    }
}

impl Qualifiers {
    /// Check these pattern qualifiers against a concrete node.
    ///
    /// Every qualifier present on the pattern must also be present on the
    /// concrete side; qualifiers the pattern leaves out are not constrained.
    /// `concrete` is `None` when the concrete node cannot carry qualifiers
    /// at all (references and arrays), which only an unqualified pattern
    /// accepts.
    #[inline]
    pub fn satisfied_by(self, concrete: Option<Qualifiers>) -> bool {
        match concrete {
            Some(concrete) => concrete.contains(self),
            None => self.is_empty(),
        }
    }

    pub(crate) fn mangle(self, out: &mut String) {
        if self.contains(Self::CONST) {
            out.push('K');
        }
        if self.contains(Self::VOLATILE) {
            out.push('V');
        }
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.contains(Self::CONST), self.contains(Self::VOLATILE)) {
            (true, true) => f.write_str("const volatile"),
            (true, false) => f.write_str("const"),
            (false, true) => f.write_str("volatile"),
            (false, false) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests;
