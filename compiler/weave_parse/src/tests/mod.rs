//! Parser tests.
//!
//! - `parser`: declarations that parse, checked through the printed form
//!   and the tree shape
//! - `errors`: one case per error kind, plus offsets

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

mod parser;

use crate::{parse_declaration, Declaration, ParseErrorKind, ParserConfig};

fn pattern(text: &str) -> Declaration {
    parse_declaration(text, ParserConfig::pattern())
        .unwrap_or_else(|error| panic!("`{text}` failed: {error}"))
}

fn concrete(text: &str) -> Declaration {
    parse_declaration(text, ParserConfig::concrete())
        .unwrap_or_else(|error| panic!("`{text}` failed: {error}"))
}

fn pattern_error(text: &str) -> ParseErrorKind {
    parse_declaration(text, ParserConfig::pattern())
        .expect_err(text)
        .kind
}

fn concrete_error(text: &str) -> ParseErrorKind {
    parse_declaration(text, ParserConfig::concrete())
        .expect_err(text)
        .kind
}

/// Print a declaration back, name included.
fn reprint(declaration: &Declaration) -> String {
    let name = declaration.name.as_ref().map(ToString::to_string);
    let mut out = String::new();
    declaration.ty.write_declaration(&mut out, name.as_deref());
    out
}
