//! The `match` command: test concrete signatures against a match expression.

use tracing::debug;
use weave_match::{ParserConfig, PatternSet, Signature};

use super::parse_or_report;

/// Parse `expr` as a match expression and report, for each concrete
/// signature, whether it matches.
pub fn match_signatures(expr: &str, signatures: &[String]) {
    let Some(pattern) = parse_or_report(expr, ParserConfig::pattern()) else {
        std::process::exit(1);
    };

    let mut concretes = Vec::with_capacity(signatures.len());
    let mut failed = false;
    for text in signatures {
        match parse_or_report(text, ParserConfig::concrete()) {
            Some(signature) => concretes.push(signature),
            None => failed = true,
        }
    }

    for (signature, matched) in match_verdicts(pattern, &concretes) {
        let verdict = if matched { "match   " } else { "no match" };
        println!("{verdict}  {signature}");
    }
    if failed {
        std::process::exit(1);
    }
}

/// Pair every concrete signature with whether `pattern` matches it.
pub fn match_verdicts(pattern: Signature, concretes: &[Signature]) -> Vec<(&Signature, bool)> {
    let mut set = PatternSet::new();
    let id = set.insert(pattern);
    let results = set.matching_all(concretes);
    debug!(concretes = concretes.len(), "evaluated match expression");

    concretes
        .iter()
        .zip(results)
        .map(|(signature, ids)| (signature, ids.contains(&id)))
        .collect()
}
