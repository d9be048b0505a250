//! The `check` command: parse expressions and show what they parsed to.

use std::fmt::Write;

use weave_match::{ParserConfig, Signature};

use super::parse_or_report;

/// Parse each expression and print its kind, canonical text, mangled form
/// and any parameter adjustments.
pub fn check_expressions(exprs: &[String], config: ParserConfig) {
    let mut failed = false;
    for expr in exprs {
        match parse_or_report(expr, config) {
            Some(signature) => print!("{}", describe(expr, &signature)),
            None => failed = true,
        }
    }
    if failed {
        std::process::exit(1);
    }
}

/// Multi-line description of a parsed signature.
pub fn describe(expr: &str, signature: &Signature) -> String {
    let mut out = String::new();
    // Writing to a String is infallible.
    let _ = writeln!(out, "{expr}");
    let _ = writeln!(out, "  kind:     {}", signature.kind());
    let _ = writeln!(out, "  parsed:   {signature}");
    let _ = writeln!(out, "  mangled:  {}", signature.mangled());
    if signature.is_trivial_match() {
        let _ = writeln!(out, "  trivial:  yes");
    }
    for adjustment in signature.adjustments().descriptions() {
        let _ = writeln!(out, "  adjusted: {adjustment}");
    }
    out
}
