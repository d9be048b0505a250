//! The `mangle` command.

use weave_match::ParserConfig;

use super::parse_or_report;

/// Print the mangled form of each signature, one per line.
///
/// Wildcards are accepted so match expressions can be inspected as well.
pub fn mangle_signatures(signatures: &[String]) {
    let mut failed = false;
    for text in signatures {
        match parse_or_report(text, ParserConfig::pattern()) {
            Some(signature) => println!("{}", signature.mangled()),
            None => failed = true,
        }
    }
    if failed {
        std::process::exit(1);
    }
}
