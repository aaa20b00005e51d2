//! The declarative `"A -> B C"` grammar surface parser (spec.md §6).
//!
//! This is one of the external collaborators spec.md names: a thin textual
//! front-end over [`crate::rule::Rule`], not part of the Earley core itself.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;
use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::Symbol;
use crate::terminal::{RhsElem, Terminal};

/// `/body/flags`, compiled once and reused across calls.
static PATTERN_TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn pattern_token_re() -> &'static Regex {
    PATTERN_TOKEN_RE.get_or_init(|| Regex::new(r"^/(.*)/([gimsxy]*)$").unwrap())
}

/// Parse `"LHS -> S1 S2 ... Sk"`, resolving or minting symbols against
/// `grammar`'s current symbol table. Sides are split on `->` exactly once;
/// either side empty is a syntax error.
///
/// The lhs symbol is seeded into a local name table *before* the rhs is
/// parsed, so a self-reference on the same line (`"sum -> sum '+' prod"`
/// introducing `sum` for the first time) resolves to the same symbol
/// identity on both sides, rather than minting a second, disconnected
/// `sum` that no rule's lhs ever matches.
pub fn parse_rule_text(grammar: &mut Grammar, text: &str) -> Result<Rule, Error> {
    let mut sides = text.splitn(2, "->");
    let lhs_text = sides
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidGrammarText(text.to_string()))?;
    let rhs_text = sides
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::InvalidGrammarText(text.to_string()))?;

    let mut local: HashMap<String, Symbol> = HashMap::new();
    let lhs = resolve_or_mint(grammar, &mut local, lhs_text);

    let mut rhs = Vec::new();
    for token in rhs_text.split_whitespace() {
        rhs.push(parse_rhs_token(grammar, &mut local, token)?);
    }
    if rhs.is_empty() {
        return Err(Error::InvalidGrammarText(text.to_string()));
    }

    Rule::new(lhs, rhs, None)
}

fn parse_rhs_token(
    grammar: &mut Grammar,
    local: &mut HashMap<String, Symbol>,
    token: &str,
) -> Result<RhsElem, Error> {
    if let Some(caps) = pattern_token_re().captures(token) {
        let body = caps.get(1).unwrap().as_str();
        let flags = caps.get(2).unwrap().as_str();
        return Ok(RhsElem::Term(Terminal::pattern(body, flags)?));
    }
    if let Some(lit) = quoted_literal(token, '\'').or_else(|| quoted_literal(token, '"')) {
        return Ok(RhsElem::Term(Terminal::literal(&lit)));
    }
    Ok(RhsElem::Sym(resolve_or_mint(grammar, local, token)))
}

fn quoted_literal(token: &str, quote: char) -> Option<String> {
    let bytes = token.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let mut chars = token.chars();
    let first = chars.next()?;
    let last = token.chars().next_back()?;
    if first == quote && last == quote {
        Some(token[first.len_utf8()..token.len() - last.len_utf8()].to_string())
    } else {
        None
    }
}

/// Check `local` first (names introduced earlier in this same rule line),
/// then `grammar`'s existing symbol table, minting a fresh symbol only if
/// neither has seen `name` before. A freshly minted symbol is recorded into
/// `local` so later tokens in the same line (including the lhs, already
/// seeded before this is called) see the same identity.
fn resolve_or_mint(grammar: &mut Grammar, local: &mut HashMap<String, Symbol>, name: &str) -> Symbol {
    if let Some(sym) = local.get(name) {
        return sym.clone();
    }
    let sym = grammar
        .find_symbol(name)
        .unwrap_or_else(|| Symbol::new(Some(name)));
    local.insert(name.to_string(), sym.clone());
    sym
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_separator_is_a_syntax_error() {
        let mut g = Grammar::new();
        assert!(matches!(
            parse_rule_text(&mut g, "sum prod"),
            Err(Error::InvalidGrammarText(_))
        ));
    }

    #[test]
    fn empty_side_is_a_syntax_error() {
        let mut g = Grammar::new();
        assert!(matches!(
            parse_rule_text(&mut g, "-> prod"),
            Err(Error::InvalidGrammarText(_))
        ));
        assert!(matches!(
            parse_rule_text(&mut g, "sum ->"),
            Err(Error::InvalidGrammarText(_))
        ));
    }

    #[test]
    fn reuses_existing_symbol_by_name() {
        let mut g = Grammar::new();
        let sum_rule = parse_rule_text(&mut g, "sum -> prod").unwrap();
        g.add_rule(sum_rule);
        let prod_rule = parse_rule_text(&mut g, "prod -> factor").unwrap();
        assert_eq!(prod_rule.lhs(), g.find_symbol("prod").as_ref().unwrap());
    }

    #[test]
    fn self_reference_on_first_introduction_shares_identity() {
        let mut g = Grammar::new();
        let rule = parse_rule_text(&mut g, "sum -> sum '+' prod").unwrap();
        let RhsElem::Sym(rhs_sum) = &rule[0] else {
            panic!("expected a symbol in rhs position 0");
        };
        assert_eq!(rule.lhs(), rhs_sum);
    }

    #[test]
    fn repeated_new_name_in_one_line_shares_identity() {
        let mut g = Grammar::new();
        let rule = parse_rule_text(&mut g, "pair -> item item").unwrap();
        assert_eq!(rule[0], rule[1]);
    }

    #[test]
    fn parses_string_and_pattern_terminals() {
        let mut g = Grammar::new();
        let rule = parse_rule_text(&mut g, r#"factor -> '(' sum ')' "#).unwrap();
        assert_eq!(rule.len(), 3);
        assert_eq!(rule[0], RhsElem::Term(Terminal::literal("(")));
        assert_eq!(rule[2], RhsElem::Term(Terminal::literal(")")));

        let num_rule = parse_rule_text(&mut g, r"factor -> /\d+/").unwrap();
        assert_eq!(num_rule[0], RhsElem::Term(Terminal::pattern(r"\d+", "").unwrap()));
    }
}
