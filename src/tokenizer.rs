//! Splits a raw sentence by all terminals appearing in the grammar
//! (spec.md §4.3). One of the external collaborators: the recognizer's only
//! contract with a tokenizer is that it hands back a sequence of strings.

use itertools::Itertools;
use regex::Regex;

use crate::error::Error;
use crate::grammar::Grammar;
use crate::terminal::RhsElem;

/// Any function of this shape may be supplied to [`crate::parse::parse`] in
/// place of the default tokenizer.
pub type Tokenizer = dyn Fn(&str, &Grammar) -> Result<Vec<String>, Error>;

/// Collect every terminal from every rule, build one alternation pattern,
/// split the input on it while keeping the delimiters, trim each piece, and
/// drop empties. Ambiguity between overlapping terminals is resolved by the
/// underlying regex engine's leftmost-match semantics.
pub fn tokenize(sentence: &str, grammar: &Grammar) -> Result<Vec<String>, Error> {
    let fragments: Vec<String> = grammar
        .rules()
        .flat_map(|rule| rule.rhs().iter())
        .filter_map(|elem| match elem {
            RhsElem::Term(term) => Some(term.tokenizer_fragment()),
            RhsElem::Sym(_) => None,
        })
        .unique()
        .collect();

    if fragments.is_empty() {
        return Ok(sentence
            .split_whitespace()
            .map(str::to_string)
            .filter(|s| !s.is_empty())
            .collect());
    }

    let alternation = format!("({})", fragments.join("|"));
    let delimiter = Regex::new(&alternation)?;

    Ok(split_keeping_delimiters(sentence, &delimiter)
        .into_iter()
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect())
}

fn split_keeping_delimiters(input: &str, delimiter: &Regex) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut last = 0;
    for m in delimiter.find_iter(input) {
        if m.start() > last {
            pieces.push(input[last..m.start()].to_string());
        }
        pieces.push(m.as_str().to_string());
        last = m.end();
    }
    if last < input.len() {
        pieces.push(input[last..].to_string());
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;
    use crate::symbol::Symbol;
    use crate::terminal::Terminal;

    fn arithmetic_grammar() -> Grammar {
        let mut g = Grammar::new();
        let sum = Symbol::new(Some("sum"));
        let prod = Symbol::new(Some("prod"));
        let factor = Symbol::new(Some("factor"));
        g.add_rule(
            Rule::new(
                sum.clone(),
                vec![
                    RhsElem::Sym(sum.clone()),
                    RhsElem::Term(Terminal::literal("+")),
                    RhsElem::Sym(prod.clone()),
                ],
                None,
            )
            .unwrap(),
        );
        g.add_rule(Rule::new(sum, vec![RhsElem::Sym(prod.clone())], None).unwrap());
        g.add_rule(
            Rule::new(
                prod.clone(),
                vec![
                    RhsElem::Sym(prod.clone()),
                    RhsElem::Term(Terminal::literal("*")),
                    RhsElem::Sym(factor.clone()),
                ],
                None,
            )
            .unwrap(),
        );
        g.add_rule(Rule::new(prod, vec![RhsElem::Sym(factor.clone())], None).unwrap());
        g.add_rule(
            Rule::new(
                factor.clone(),
                vec![
                    RhsElem::Term(Terminal::literal("(")),
                    RhsElem::Sym(factor.clone()), // placeholder self-ref not used in test
                    RhsElem::Term(Terminal::literal(")")),
                ],
                None,
            )
            .unwrap(),
        );
        g.add_rule(
            Rule::new(factor, vec![RhsElem::Term(Terminal::pattern(r"\d+", "").unwrap())], None)
                .unwrap(),
        );
        g
    }

    #[test]
    fn tokenizes_arithmetic_sentence() {
        let g = arithmetic_grammar();
        let tokens = tokenize("23 + (32 * 46)", &g).unwrap();
        assert_eq!(tokens, vec!["23", "+", "(", "32", "*", "46", ")"]);
    }

    #[test]
    fn tokenizes_without_surrounding_whitespace() {
        let g = arithmetic_grammar();
        let tokens = tokenize("2*3", &g).unwrap();
        assert_eq!(tokens, vec!["2", "*", "3"]);
    }

    #[test]
    fn drops_empty_pieces() {
        let g = arithmetic_grammar();
        let tokens = tokenize("  2   *   3  ", &g).unwrap();
        assert_eq!(tokens, vec!["2", "*", "3"]);
    }
}
