//! Join-point signatures and pointcut pattern matching.
//!
//! A [`Signature`] is either a match expression (parsed with wildcards) or
//! a concrete signature describing one real declaration. Both share the
//! same representation, so a pattern is matched against a concrete
//! signature with [`Signature::matches`].
//!
//! ```ignore
//! let pattern = Signature::pattern("% ...::%(int, ...)")?;
//! let concrete = Signature::concrete("void net::Socket::send(int, const char *)")?;
//! assert!(pattern.matches(&concrete));
//! ```
//!
//! [`PatternSet`] holds many patterns and evaluates them in parallel.

mod error;
mod set;
mod signature;

pub use error::SignatureError;
pub use set::{PatternId, PatternSet};
pub use signature::{PatternState, Signature, SignatureKind};

pub use weave_ir::{Adjustments, QualifiedName, Specifiers, TypePattern};
pub use weave_parse::{ParseError, ParseErrorKind, ParserConfig, WildcardMode};
