//! CLI entry point for the `litfold` tool.
//!
//! Each argument is evaluated as one literal, optionally signed, with the
//! default tier table. Results print as S-expressions; diagnostics go to
//! standard error and make the process exit with status 1.

use std::io::{self, Write};

use chumsky::error::SimpleReason;
use litfold::{TierTable, parse_constant};

fn main() {
    let tiers = TierTable::default();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut failed = false;
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        let _ = writeln!(stderr, "usage: litfold <literal>...");
        std::process::exit(2);
    }
    for arg in &args {
        match parse_constant(arg, &tiers) {
            Ok(expr) => {
                let _ = writeln!(stdout, "{}", expr.value().to_sexpr());
            }
            Err(errors) => {
                failed = true;
                for error in errors {
                    let message = match error.reason() {
                        SimpleReason::Custom(msg) => msg.clone(),
                        other => format!("{other:?}"),
                    };
                    let _ = writeln!(stderr, "{arg}: {message} at {:?}", error.span());
                }
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}
