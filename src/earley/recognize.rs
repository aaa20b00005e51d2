//! The Earley chart construction (spec.md §4.4): predict, scan, complete.

use std::collections::HashSet;
use std::fmt;

use log::trace;

use crate::error::Error;
use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::terminal::RhsElem;

/// `(rule, dot_position, origin)`: a prefix of `rule.rhs` of length
/// `dot_position` has been matched starting at state `origin`.
#[derive(Clone)]
pub struct EarleyItem {
    pub rule: Rule,
    pub dot: usize,
    pub origin: usize,
}

impl EarleyItem {
    pub fn is_complete(&self) -> bool {
        self.dot == self.rule.len()
    }
}

impl fmt::Debug for EarleyItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} @dot={}, origin={})",
            self.rule, self.dot, self.origin
        )
    }
}

/// An array of length `n+1` of item sets, indexed by token position.
pub type Chart = Vec<Vec<EarleyItem>>;

/// The optional resource guard from spec.md §5: a pathological grammar may
/// produce a large chart; exceeding this bound fails fast with
/// `Error::GrammarTooExplosive` instead of growing state unboundedly.
#[derive(Clone, Debug, Default)]
pub struct RecognizerOptions {
    pub max_items_per_state: Option<usize>,
}

/// Build the chart for `tokens` against `grammar`. Never fails except via
/// the optional `max_items_per_state` guard; an incorrect or empty input
/// yields a chart from which the extractor will later raise `NoParse`.
pub fn recognize(
    tokens: &[String],
    grammar: &Grammar,
    options: &RecognizerOptions,
) -> Result<Chart, Error> {
    let n = tokens.len();
    let mut chart: Chart = (0..=n).map(|_| Vec::new()).collect();
    let mut seen: Vec<HashSet<(usize, usize, usize)>> = (0..=n).map(|_| HashSet::new()).collect();

    for rule in grammar.rules() {
        add_item(
            &mut chart,
            &mut seen,
            0,
            EarleyItem {
                rule: rule.clone(),
                dot: 0,
                origin: 0,
            },
            options,
        )?;
    }

    for i in 0..=n {
        let mut j = 0;
        while j < chart[i].len() {
            let item = chart[i][j].clone();
            if !item.is_complete() {
                match &item.rule[item.dot] {
                    RhsElem::Sym(next_sym) => {
                        trace!("PREDICT at {i}: {item:?} -> {next_sym}");
                        for rule in grammar.rules() {
                            if rule.lhs() == next_sym {
                                add_item(
                                    &mut chart,
                                    &mut seen,
                                    i,
                                    EarleyItem {
                                        rule: rule.clone(),
                                        dot: 0,
                                        origin: i,
                                    },
                                    options,
                                )?;
                            }
                        }
                    }
                    RhsElem::Term(term) => {
                        if i < n && term.matches(&tokens[i]) {
                            trace!("SCAN at {i}: {item:?} matched {:?}", tokens[i]);
                            add_item(
                                &mut chart,
                                &mut seen,
                                i + 1,
                                EarleyItem {
                                    rule: item.rule.clone(),
                                    dot: item.dot + 1,
                                    origin: item.origin,
                                },
                                options,
                            )?;
                        }
                    }
                }
            } else {
                trace!("COMPLETE at {i}: {item:?}");
                let lhs = item.rule.lhs().clone();
                let origin = item.origin;
                let candidates: Vec<(Rule, usize, usize)> = chart[origin]
                    .iter()
                    .filter(|cand| !cand.is_complete())
                    .filter_map(|cand| match &cand.rule[cand.dot] {
                        RhsElem::Sym(s) if *s == lhs => {
                            Some((cand.rule.clone(), cand.dot, cand.origin))
                        }
                        _ => None,
                    })
                    .collect();
                for (rule, dot, cand_origin) in candidates {
                    add_item(
                        &mut chart,
                        &mut seen,
                        i,
                        EarleyItem {
                            rule,
                            dot: dot + 1,
                            origin: cand_origin,
                        },
                        options,
                    )?;
                }
            }
            j += 1;
        }
    }

    Ok(chart)
}

fn add_item(
    chart: &mut Chart,
    seen: &mut [HashSet<(usize, usize, usize)>],
    state: usize,
    item: EarleyItem,
    options: &RecognizerOptions,
) -> Result<(), Error> {
    let key = (item.rule.id(), item.dot, item.origin);
    if !seen[state].insert(key) {
        return Ok(());
    }
    if let Some(max) = options.max_items_per_state {
        if chart[state].len() >= max {
            return Err(Error::GrammarTooExplosive { state });
        }
    }
    chart[state].push(item);
    Ok(())
}
