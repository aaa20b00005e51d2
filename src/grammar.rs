//! An ordered sequence of rules with symbol-lookup helpers.

use std::collections::HashMap;
use std::fmt;

use smol_str::SmolStr;

use crate::error::Error;
use crate::grammar_text;
use crate::rule::Rule;
use crate::symbol::Symbol;
use crate::terminal::RhsElem;

/// An ordered sequence of rules. Rule order is observable: the recognizer
/// seeds state 0 in grammar order, and the extractor prefers earlier-added
/// rules when resolving ambiguity.
#[derive(Clone, Default)]
pub struct Grammar {
    rules: Vec<Rule>,
}

impl Grammar {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// `make_grammar(initial_rules?)` from the programmatic surface.
    pub fn with_rules(initial: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: initial.into_iter().collect(),
        }
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// The declarative `"LHS -> S1 S2 ... Sk"` textual rule-builder surface
    /// (spec.md §6). Parses `text`, resolving or minting symbols against
    /// this grammar's current name table, appends the resulting rule, and
    /// returns it.
    pub fn add_rule_text(&mut self, text: &str) -> Result<Rule, Error> {
        let rule = grammar_text::parse_rule_text(self, text)?;
        self.add_rule(rule.clone());
        Ok(rule)
    }

    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// A name -> symbol mapping built by scanning every rule's lhs and every
    /// symbol-valued rhs element. Fails with `DuplicateSymbolName` if two
    /// distinct symbol identities share a name.
    pub fn symbols(&self) -> Result<HashMap<SmolStr, Symbol>, Error> {
        let mut table: HashMap<SmolStr, Symbol> = HashMap::new();
        let mut record = |sym: &Symbol, table: &mut HashMap<SmolStr, Symbol>| -> Result<(), Error> {
            let Some(name) = sym.name() else { return Ok(()) };
            let name = SmolStr::new(name);
            match table.get(&name) {
                Some(existing) if existing != sym => {
                    Err(Error::DuplicateSymbolName(name.to_string()))
                }
                _ => {
                    table.insert(name, sym.clone());
                    Ok(())
                }
            }
        };
        for rule in &self.rules {
            record(rule.lhs(), &mut table)?;
            for elem in rule.rhs() {
                if let RhsElem::Sym(sym) = elem {
                    record(sym, &mut table)?;
                }
            }
        }
        Ok(table)
    }

    /// Find an existing symbol by name, scanning in grammar order.
    pub(crate) fn find_symbol(&self, name: &str) -> Option<Symbol> {
        for rule in &self.rules {
            if rule.lhs().name() == Some(name) {
                return Some(rule.lhs().clone());
            }
            for elem in rule.rhs() {
                if let RhsElem::Sym(sym) = elem {
                    if sym.name() == Some(name) {
                        return Some(sym.clone());
                    }
                }
            }
        }
        None
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = string_builder::Builder::default();
        for rule in &self.rules {
            builder.append(rule.to_string());
            builder.append("\n");
        }
        write!(f, "{}", builder.string().unwrap_or_default())
    }
}
