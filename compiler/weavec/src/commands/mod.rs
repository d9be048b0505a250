//! Command handlers for the weave CLI.
//!
//! Each submodule implements one command. Handlers print their results and
//! exit with status 1 when any input fails to parse.

mod check;
mod explain;
mod mangle;
mod matching;

pub use check::{check_expressions, describe};
pub use explain::explain_error;
pub use mangle::mangle_signatures;
pub use matching::{match_signatures, match_verdicts};

use weave_match::{ParserConfig, Signature};

use crate::report::emit_parse_error;

/// Parse `text`, reporting a diagnostic on failure.
pub(crate) fn parse_or_report(text: &str, config: ParserConfig) -> Option<Signature> {
    let mut signature = Signature::new(config);
    match signature.parse(text) {
        Ok(()) => Some(signature),
        Err(error) => {
            emit_parse_error(text, &error);
            None
        }
    }
}
