//! Wildcard-capable identifier patterns.
//!
//! A `%` inside a name component matches any (possibly empty) run of
//! characters: `get%` matches `get`, `getX` and `get_value`. The pattern is
//! classified once at construction so that the common cases never touch
//! the regex engine.

use std::fmt;
use std::hash::{Hash, Hasher};

use regex::Regex;
use tracing::warn;

use crate::WILDCARD;

#[derive(Clone, Debug)]
enum Matcher {
    /// No wildcard: plain string comparison.
    Exact,
    /// Only wildcard characters: matches every name.
    Everything,
    /// Mixed literal text and wildcards.
    Compiled(Regex),
    /// The wildcard expression failed to compile and matches nothing.
    Invalid,
}

/// One identifier pattern, e.g. `foo`, `%` or `get%Value`.
///
/// Equality and hashing consider only the source text.
#[derive(Clone, Debug)]
pub struct NamePattern {
    source: String,
    matcher: Matcher,
}

impl NamePattern {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let matcher = Self::classify(&source);
        NamePattern { source, matcher }
    }

    fn classify(source: &str) -> Matcher {
        if !source.contains(WILDCARD) {
            return Matcher::Exact;
        }
        if source.chars().all(|c| c == WILDCARD) {
            return Matcher::Everything;
        }

        let body = source
            .split(WILDCARD)
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        match Regex::new(&format!("^(?s:{body})$")) {
            Ok(regex) => Matcher::Compiled(regex),
            Err(error) => {
                warn!(pattern = source, %error, "wildcard name does not compile");
                Matcher::Invalid
            }
        }
    }

    /// The text this pattern was built from.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Does the source contain a `%`?
    #[inline]
    pub fn has_wildcard(&self) -> bool {
        !matches!(self.matcher, Matcher::Exact)
    }

    /// Does this pattern match every name (`%`, `%%`, ...)?
    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self.matcher, Matcher::Everything)
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::Exact => self.source == name,
            Matcher::Everything => true,
            Matcher::Compiled(regex) => regex.is_match(name),
            Matcher::Invalid => false,
        }
    }
}

impl PartialEq for NamePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for NamePattern {}

impl Hash for NamePattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for NamePattern {
    fn from(source: &str) -> Self {
        NamePattern::new(source)
    }
}
