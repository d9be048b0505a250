//! Declaration specifiers that survive into a signature.

use bitflags::bitflags;

bitflags! {
    /// `virtual` and `static`, the only specifiers a signature keeps.
    ///
    /// A pattern carrying one requires it on the concrete side; a pattern
    /// without it accepts both.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Specifiers: u8 {
        const VIRTUAL = 1 << 0;
        const STATIC = 1 << 1;
    }
}

impl Specifiers {
    /// Source keywords, in canonical order.
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        [(Specifiers::VIRTUAL, "virtual"), (Specifiers::STATIC, "static")]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| keyword)
    }
}

#[cfg(test)]
mod tests;
