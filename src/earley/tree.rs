//! DFS extraction of one parse tree from a transformed chart (spec.md §4.6).

use log::warn;

use crate::earley::transform::{CompletedSpan, TransformedChart};
use crate::error::Error;
use crate::rule::Rule;
use crate::terminal::RhsElem;

/// A child of a tree node: either a matched token or a nested derivation.
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Token(String),
    Node(Tree),
}

/// One node of a parse tree: the rule that produced it, and its children in
/// rhs order.
#[derive(Clone, Debug, PartialEq)]
pub struct Tree {
    pub rule: Rule,
    pub children: Vec<Child>,
}

/// Walk `chart` (already transformed to start-indexed spans) and extract one
/// tree spanning the whole input. Picks, among the complete spans starting
/// at 0, the one with the largest `end`; fails with `NoParse` if none spans
/// all `tokens.len()` positions. `NoParse::at` is 0 if nothing rooted at 0
/// completed at all, otherwise the longest prefix any root-candidate spans;
/// `NoParse::token` names `tokens[at]`, the offending terminal, when one
/// exists at that position.
pub fn extract(chart: &TransformedChart, tokens: &[String]) -> Result<Tree, Error> {
    let n = tokens.len();
    let roots: Vec<&CompletedSpan> = chart.first().into_iter().flatten().collect();
    let longest_prefix = roots.iter().map(|span| span.end).max().unwrap_or(0);

    let root = roots
        .iter()
        .filter(|span| span.end == n)
        .max_by_key(|span| span.end)
        .copied()
        .ok_or_else(|| no_parse_at(longest_prefix, tokens))?;

    expand(&root.rule, 0, root.end, chart, tokens)
        .ok_or_else(|| no_parse_at(longest_prefix, tokens))
        .map(|(tree, _)| tree)
}

fn no_parse_at(at: usize, tokens: &[String]) -> Error {
    Error::NoParse {
        at,
        token: tokens.get(at).cloned(),
    }
}

/// Try to build a node for `rule` spanning exactly `[start, end)`. Returns
/// `None` if no combination of rhs element derivations closes the span.
fn expand(
    rule: &Rule,
    start: usize,
    end: usize,
    chart: &TransformedChart,
    tokens: &[String],
) -> Option<(Tree, usize)> {
    let children = helper(rule.rhs(), 0, start, end, chart, tokens)?;
    Some((
        Tree {
            rule: rule.clone(),
            children,
        },
        end,
    ))
}

/// Recursively match `rhs[index..]` against `[pos, end)`. At each position,
/// a terminal must match the next token exactly; a symbol tries every
/// completed span starting at `pos`, in chart order, taking the first
/// candidate whose remainder also succeeds (first-successful-candidate
/// ambiguity resolution, logged when more than one candidate exists).
fn helper(
    rhs: &[RhsElem],
    index: usize,
    pos: usize,
    end: usize,
    chart: &TransformedChart,
    tokens: &[String],
) -> Option<Vec<Child>> {
    if index == rhs.len() {
        return if pos == end { Some(Vec::new()) } else { None };
    }

    match &rhs[index] {
        RhsElem::Term(term) => {
            if pos >= end || pos >= tokens.len() || !term.matches(&tokens[pos]) {
                return None;
            }
            let mut rest = helper(rhs, index + 1, pos + 1, end, chart, tokens)?;
            rest.insert(0, Child::Token(tokens[pos].clone()));
            Some(rest)
        }
        RhsElem::Sym(sym) => {
            let candidates: Vec<&CompletedSpan> = chart
                .get(pos)
                .into_iter()
                .flatten()
                .filter(|span| span.rule.lhs() == sym && span.end <= end)
                .collect();
            if candidates.len() > 1 {
                warn!(
                    "ambiguous derivation for {sym} at position {pos}: {} candidates, taking the first",
                    candidates.len()
                );
            }
            for span in candidates {
                let Some((node, _)) = expand(&span.rule, pos, span.end, chart, tokens) else {
                    continue;
                };
                if let Some(mut rest) = helper(rhs, index + 1, span.end, end, chart, tokens) {
                    rest.insert(0, Child::Node(node));
                    return Some(rest);
                }
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::earley::recognize::{recognize, RecognizerOptions};
    use crate::earley::transform::transform;
    use crate::grammar::Grammar;
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
                vec![RhsElem::Term(Terminal::pattern(r"\d+", "").unwrap())],
                None,
            )
            .unwrap(),
        );
        g
    }

    fn flatten_tokens(tree: &Tree, out: &mut Vec<String>) {
        for child in &tree.children {
            match child {
                Child::Token(tok) => out.push(tok.clone()),
                Child::Node(node) => flatten_tokens(node, out),
            }
        }
    }

    #[test]
    fn extracts_a_tree_spanning_the_whole_input() {
        let g = arithmetic_grammar();
        let tokens = vec!["2".into(), "*".into(), "3".into()];
        let chart = recognize(&tokens, &g, &RecognizerOptions::default()).unwrap();
        let transformed = transform(&chart);
        let tree = extract(&transformed, &tokens).unwrap();
        let mut leaves = Vec::new();
        flatten_tokens(&tree, &mut leaves);
        assert_eq!(leaves, tokens);
    }

    #[test]
    fn fails_with_no_parse_on_unparseable_input() {
        let g = arithmetic_grammar();
        let tokens = vec!["*".into(), "2".into()];
        let chart = recognize(&tokens, &g, &RecognizerOptions::default()).unwrap();
        let transformed = transform(&chart);
        assert!(matches!(
            extract(&transformed, &tokens),
            Err(Error::NoParse { .. })
        ));
    }

    #[test]
    fn fails_with_no_parse_on_trailing_garbage() {
        let g = arithmetic_grammar();
        let tokens = vec!["2".into(), "*".into(), "3".into(), "*".into()];
        let chart = recognize(&tokens, &g, &RecognizerOptions::default()).unwrap();
        let transformed = transform(&chart);
        assert!(matches!(
            extract(&transformed, &tokens),
            Err(Error::NoParse { .. })
        ));
    }
}
