//! Shared CLI plumbing for the `eb` binary's subcommands.

pub mod cmd_parse;
pub mod cmd_repl;

use std::fs;
use std::path::Path;

use crate::earley::{Child, Tree};
use crate::error::Error;
use crate::grammar::Grammar;

/// `-v`/`-vv` maps to `debug`/`trace`; bare invocation stays at the
/// `env_logger` default (`RUST_LOG`, or `error` if unset).
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    };
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level.parse().unwrap());
    }
    let _ = builder.try_init();
}

/// Read `path` and build a grammar from its `"LHS -> S1 S2 ... Sk"` lines,
/// skipping blank lines and `#`-prefixed comments.
pub fn load_grammar(path: &Path) -> Result<Grammar, Error> {
    let text = fs::read_to_string(path)?;
    let mut grammar = Grammar::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        grammar.add_rule_text(line)?;
    }
    Ok(grammar)
}

/// `input` is treated as a path if it names an existing file, otherwise as
/// the sentence itself.
pub fn resolve_input(input: &str) -> Result<String, Error> {
    let path = Path::new(input);
    if path.is_file() {
        Ok(fs::read_to_string(path)?)
    } else {
        Ok(input.to_string())
    }
}

/// Recursive indented `rule-name` printer (ground truth: teacher's
/// `Parser::tree_to_testfmt`, generalized from XML tags to rule names).
pub fn print_tree(tree: &Tree, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{indent}{}", tree.rule.lhs());
    for child in &tree.children {
        match child {
            Child::Token(token) => println!("{indent}  {token:?}"),
            Child::Node(node) => print_tree(node, depth + 1),
        }
    }
}
