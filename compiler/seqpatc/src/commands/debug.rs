//! Debug commands: `parse` and `lex` for inspecting the front end.

use crate::{CliError, Session};

/// Parse a file and display its switches and parse errors.
pub fn parse_file(path: &str) -> Result<(), CliError> {
    let session = Session::load(path)?;
    let interner = session.interner();
    let parsed = session.parsed();

    println!("Parse result for '{path}':");
    println!("  Switches: {}", parsed.module.switches.len());
    println!("  Errors: {}", parsed.errors.len());

    if !parsed.module.switches.is_empty() {
        println!();
        println!("Switches:");
        for switch in &parsed.module.switches {
            let param = switch.param.map_or("", |p| interner.lookup(p));
            println!(
                "  {}({param}: {})",
                interner.lookup(switch.name),
                switch.effective_subject_type()
            );
            for arm in &switch.arms {
                let patterns: Vec<String> = arm
                    .patterns
                    .iter()
                    .map(|p| p.display(interner).to_string())
                    .collect();
                let guard = if arm.guard.is_some() { " if ..." } else { "" };
                let body = session
                    .source()
                    .get(arm.body.span.to_range())
                    .unwrap_or("<body>");
                println!("    case {}{guard} => {body}", patterns.join(" | "));
            }
        }
    }

    if !parsed.errors.is_empty() {
        println!();
        println!("Errors:");
        for error in &parsed.errors {
            println!("  {error}");
        }
    }
    Ok(())
}

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> Result<(), CliError> {
    let session = Session::load(path)?;
    let tokens = session.tokens();

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in tokens.iter() {
        println!("  {token:?}");
    }
    Ok(())
}
