//! Weave CLI
//!
//! Parse, match and mangle pointcut signature expressions.

use weave_match::ParserConfig;
use weavec::commands::{check_expressions, explain_error, mangle_signatures, match_signatures};

fn main() {
    weavec::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "check" => {
            let concrete = args.iter().skip(2).any(|a| a == "--concrete");
            let exprs: Vec<String> = args
                .iter()
                .skip(2)
                .filter(|a| a.as_str() != "--concrete")
                .cloned()
                .collect();
            if exprs.is_empty() {
                eprintln!("Usage: weave check [--concrete] <expr>...");
                std::process::exit(1);
            }
            let config = if concrete {
                ParserConfig::concrete()
            } else {
                ParserConfig::pattern()
            };
            check_expressions(&exprs, config);
        }
        "match" => {
            if args.len() < 4 {
                eprintln!("Usage: weave match <expr> <signature>...");
                eprintln!("Example: weave match '% ...::get%(...)' 'int A::getX() const'");
                std::process::exit(1);
            }
            match_signatures(&args[2], &args[3..]);
        }
        "mangle" => {
            if args.len() < 3 {
                eprintln!("Usage: weave mangle <signature>...");
                std::process::exit(1);
            }
            mangle_signatures(&args[2..]);
        }
        "--explain" | "explain" => {
            if args.len() < 3 {
                eprintln!("Usage: weave explain <ERROR_CODE>");
                eprintln!("Example: weave explain E1005");
                std::process::exit(1);
            }
            explain_error(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("weave {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Weave signature matcher");
    println!();
    println!("Usage: weave <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <expr>...                Parse match expressions and show the result");
    println!("  match <expr> <signature>...    Test concrete signatures against an expression");
    println!("  mangle <signature>...          Print mangled forms");
    println!("  explain <code>                 Explain an error code (e.g., E1005)");
    println!("  help                           Show this help message");
    println!("  version                        Show version information");
    println!();
    println!("Check options:");
    println!("  --concrete    Parse as concrete signatures (no wildcards)");
    println!();
    println!("Examples:");
    println!("  weave check '% ...::%(...)'");
    println!("  weave check --concrete 'void f(int [3])'");
    println!("  weave match 'virtual % A::%(...)' 'virtual void A::f()' 'void A::g()'");
    println!("  weave mangle 'int C::f(char) const'");
    println!("  weave explain E1005");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=weave_parse=trace) for parser tracing.");
}
