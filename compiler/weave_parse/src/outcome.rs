//! Three-way parse outcome.
//!
//! Productions that may legitimately be absent return `ParseOutcome`:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `Matched` | Production present and parsed |
//! | `Declined` | Production absent, cursor unchanged, try the next alternative |
//! | `Failed` | Production committed and broke, stop the whole parse |
//!
//! Productions that are always present (a declaration, a post-declarator
//! chain) return `Result<T, ParseError>` instead. The two meet through the
//! macros below and [`ParseOutcome::into_result`].
//!
//! ## Usage
//!
//! ```ignore
//! fn parse_type_name(&mut self) -> ParseOutcome<QualifiedName> {
//!     let mut name = QualifiedName::new();
//!     commit!(self.parse_nested_name(&mut name));
//!     let args = try_outcome!(self, self.parse_template_args());
//!     // ...
//! }
//! ```

use crate::ParseError;

/// Result of a production that may decline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum ParseOutcome<T> {
    Matched(T),
    /// Not applicable here. No input was consumed.
    Declined,
    Failed(ParseError),
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn is_matched(&self) -> bool {
        matches!(self, ParseOutcome::Matched(_))
    }

    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self, ParseOutcome::Failed(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<U> {
        match self {
            ParseOutcome::Matched(value) => ParseOutcome::Matched(f(value)),
            ParseOutcome::Declined => ParseOutcome::Declined,
            ParseOutcome::Failed(error) => ParseOutcome::Failed(error),
        }
    }

    /// Bridge into `Result`-returning productions: `Declined` becomes `None`.
    pub fn into_result(self) -> Result<Option<T>, ParseError> {
        match self {
            ParseOutcome::Matched(value) => Ok(Some(value)),
            ParseOutcome::Declined => Ok(None),
            ParseOutcome::Failed(error) => Err(error),
        }
    }
}

impl<T> From<Result<T, ParseError>> for ParseOutcome<T> {
    fn from(result: Result<T, ParseError>) -> Self {
        match result {
            Ok(value) => ParseOutcome::Matched(value),
            Err(error) => ParseOutcome::Failed(error),
        }
    }
}

/// Try an optional production: `Some(value)` when matched, `None` when declined.
///
/// A declined production has the parser restored to where it started. A
/// failure returns from the enclosing function, which must return
/// `ParseOutcome`.
#[macro_export]
macro_rules! try_outcome {
    ($self:expr, $parser:expr) => {{
        let snapshot = $self.snapshot();
        match $parser {
            $crate::ParseOutcome::Matched(value) => Some(value),
            $crate::ParseOutcome::Declined => {
                $self.restore(snapshot);
                None
            }
            $crate::ParseOutcome::Failed(error) => {
                return $crate::ParseOutcome::Failed(error);
            }
        }
    }};
}

/// Require a production, upgrading a decline to a hard error of `$kind`.
///
/// The error is reported at the position where the production was tried.
#[macro_export]
macro_rules! require {
    ($self:expr, $parser:expr, $kind:expr) => {{
        let offset = $self.position();
        match $parser {
            $crate::ParseOutcome::Matched(value) => value,
            $crate::ParseOutcome::Declined => {
                return $crate::ParseOutcome::Failed($crate::ParseError::new($kind, offset));
            }
            $crate::ParseOutcome::Failed(error) => {
                return $crate::ParseOutcome::Failed(error);
            }
        }
    }};
}

/// Unwrap a `Result` inside a `ParseOutcome`-returning production.
#[macro_export]
macro_rules! commit {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(error) => return $crate::ParseOutcome::Failed(error),
        }
    };
}

#[cfg(test)]
mod tests;
