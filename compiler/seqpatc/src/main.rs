//! seqpat CLI
//!
//! Check and run sequence-pattern switches.

use seqpatc::commands::{check_file, explain_error, lex_file, parse_file, run_file};
use seqpatc::{init_tracing, CliError, Options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    // Flag-shaped commands are handled before option parsing claims `--`.
    match args[1].as_str() {
        "--help" | "-h" => {
            print_usage();
            return;
        }
        "--version" | "-V" => {
            print_version();
            return;
        }
        "--explain" => {
            if args.len() < 3 {
                eprintln!("Usage: seqpat --explain <ERROR_CODE>");
                eprintln!("Example: seqpat --explain E3002");
                std::process::exit(2);
            }
            finish(explain_error(&args[2]));
        }
        _ => {}
    }

    let (options, positional) = match Options::parse(&args[1..]) {
        Ok(parsed) => parsed,
        Err(e) => finish(Err(e)),
    };

    let Some((command, rest)) = positional.split_first() else {
        print_usage();
        return;
    };

    let result = match command.as_str() {
        "check" => {
            let [path] = rest else {
                usage_error("Usage: seqpat check <file.sp> [--deny-warnings] [--format=text|json]");
            };
            check_file(path, options)
        }
        "run" => {
            let [path, switch, subjects @ ..] = rest else {
                usage_error("Usage: seqpat run <file.sp> <switch> <subject>...");
            };
            run_file(path, switch, subjects, options)
        }
        "parse" => {
            let [path] = rest else {
                usage_error("Usage: seqpat parse <file.sp>");
            };
            parse_file(path)
        }
        "lex" => {
            let [path] = rest else {
                usage_error("Usage: seqpat lex <file.sp>");
            };
            lex_file(path)
        }
        "explain" => {
            let [code] = rest else {
                usage_error("Usage: seqpat explain <ERROR_CODE>");
            };
            explain_error(code)
        }
        "help" => {
            print_usage();
            Ok(())
        }
        "version" => {
            print_version();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    finish(result);
}

/// Exit with the error's code after printing it; return normally on success.
fn finish(result: Result<(), CliError>) -> ! {
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn usage_error(usage: &str) -> ! {
    eprintln!("{usage}");
    std::process::exit(2);
}

fn print_version() {
    println!("seqpat {}", env!("CARGO_PKG_VERSION"));
}

fn print_usage() {
    println!("seqpat: sequence-pattern switches");
    println!();
    println!("Usage: seqpat <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file.sp>                 Parse and check every switch");
    println!("  run <file.sp> <switch> <subj>.. Select a case body for each subject");
    println!("  parse <file.sp>                 Parse and display switches");
    println!("  lex <file.sp>                   Tokenize and display tokens");
    println!("  explain <code>, --explain <code>");
    println!("                                  Explain an error code (e.g., E3002)");
    println!("  help                            Show this help message");
    println!("  version                         Show version information");
    println!();
    println!("Options:");
    println!("  --deny-warnings       Treat unreachable clauses as errors");
    println!("  --format=<fmt>        Diagnostic format: text (default), json");
    println!("  --color=<when>        Colored output: auto (default), always, never");
    println!();
    println!("Subjects are literals: 1, \"a\", 'c', true, null, [0, [1, 2]]");
    println!();
    println!("Examples:");
    println!("  seqpat check lists.sp");
    println!("  seqpat check lists.sp --format=json");
    println!("  seqpat run lists.sp foo '[0, 1, 2]' null '[]'");
    println!("  seqpat --explain E3002");
    println!();
    println!("Set RUST_LOG=debug for tracing output; add SEQPAT_LOG_TREE=1 to nest it.");
}
