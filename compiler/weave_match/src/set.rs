//! A collection of pointcut patterns evaluated together.
//!
//! A weaver checks every declaration of a translation unit against every
//! pattern of every aspect. Identical patterns are stored once, keyed by
//! their mangled form and specifiers, and each concrete signature is tested
//! against all patterns in parallel. Matching is read-only, so no locking
//! is involved.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};
use weave_ir::Specifiers;
use weave_parse::ParseError;

use crate::Signature;

/// Index of a pattern within its [`PatternSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternId(usize);

impl PatternId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Signature>,
    by_key: FxHashMap<(String, Specifiers), PatternId>,
}

impl PatternSet {
    pub fn new() -> Self {
        PatternSet::default()
    }

    /// Add a pattern, returning the id of an identical one if present.
    pub fn insert(&mut self, pattern: Signature) -> PatternId {
        let key = (pattern.mangled(), pattern.specifiers());
        if let Some(&id) = self.by_key.get(&key) {
            debug!(%pattern, ?id, "duplicate pattern");
            return id;
        }
        let id = PatternId(self.patterns.len());
        self.patterns.push(pattern);
        self.by_key.insert(key, id);
        id
    }

    /// Parse a match expression and add it.
    pub fn insert_text(&mut self, text: &str) -> Result<PatternId, ParseError> {
        Ok(self.insert(Signature::pattern(text)?))
    }

    pub fn get(&self, id: PatternId) -> Option<&Signature> {
        self.patterns.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PatternId, &Signature)> {
        self.patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| (PatternId(index), pattern))
    }

    /// Ids of every pattern `concrete` satisfies, in insertion order.
    #[instrument(level = "debug", skip_all, fields(patterns = self.patterns.len()))]
    pub fn matching(&self, concrete: &Signature) -> Vec<PatternId> {
        self.patterns
            .par_iter()
            .enumerate()
            .filter(|(_, pattern)| pattern.matches(concrete))
            .map(|(index, _)| PatternId(index))
            .collect()
    }

    /// [`matching`](Self::matching) for a batch of concrete signatures.
    #[instrument(level = "debug", skip_all, fields(patterns = self.patterns.len(), signatures = concretes.len()))]
    pub fn matching_all(&self, concretes: &[Signature]) -> Vec<Vec<PatternId>> {
        concretes
            .par_iter()
            .map(|concrete| {
                self.patterns
                    .iter()
                    .enumerate()
                    .filter(|(_, pattern)| pattern.matches(concrete))
                    .map(|(index, _)| PatternId(index))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
