//! The `explain` command: display documentation for error codes.

use weave_match::SignatureError;

/// Display the explanation for an error code such as `E1005`.
pub fn explain_error(code_str: &str) {
    let Some(error) = SignatureError::from_code(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Parse errors use E1XXX, declaration errors E2XXX.");
        eprintln!("Examples: E1001, E1005, E2001");
        std::process::exit(1);
    };

    let summary = match error {
        SignatureError::Parse(parse) => parse.kind.to_string(),
        other => other.to_string(),
    };
    println!("{}: {summary}", error.code());
    println!();
    println!("{}", error.explanation());
}
