//! Parser configuration.

/// Whether `%` is a wildcard.
///
/// Match expressions allow it. Concrete signatures describe one entity and
/// reject it with [`WildcardNotAllowed`](crate::ParseErrorKind::WildcardNotAllowed),
/// except as the spelling of `operator %`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WildcardMode {
    Allowed,
    #[default]
    Forbidden,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ParserConfig {
    pub wildcards: WildcardMode,
}

impl ParserConfig {
    /// Configuration for match expressions.
    pub fn pattern() -> Self {
        ParserConfig {
            wildcards: WildcardMode::Allowed,
        }
    }

    /// Configuration for concrete signatures.
    pub fn concrete() -> Self {
        ParserConfig {
            wildcards: WildcardMode::Forbidden,
        }
    }

    #[inline]
    pub fn wildcards_allowed(self) -> bool {
        self.wildcards == WildcardMode::Allowed
    }
}
