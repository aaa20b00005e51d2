//! Productions: `(lhs, rhs, valuator?)`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::Error;
use crate::symbol::Symbol;
use crate::terminal::RhsElem;

static NEXT_RULE_ID: AtomicUsize = AtomicUsize::new(0);

/// The value a valuator folds a node's children into, and the value a node's
/// children are folded from. `Rule::evaluate` requires `Value::List` -- the
/// "positional sequence" spec.md names -- and fails on anything else.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Unit,
    Number(f64),
    Text(String),
    List(Vec<Value>),
}

/// An opaque user callback invoked externally on a tree node's child values.
/// The core never calls this; it is owned and invoked by the caller's own
/// bottom-up fold over a `Tree`.
pub type Valuator = Rc<dyn Fn(&[Value]) -> Value>;

struct RuleInner {
    id: usize,
    lhs: Symbol,
    rhs: Vec<RhsElem>,
    valuator: Option<Valuator>,
}

/// A production `lhs -> rhs`, optionally carrying a valuator. Cheap to
/// clone (an `Rc` handle); identity -- not structural content -- is what an
/// Earley item's duplicate-suppression key compares.
#[derive(Clone)]
pub struct Rule(Rc<RuleInner>);

impl Rule {
    /// `make_rule(lhs, rhs, valuator?) -> Rule`. Fails on an empty rhs.
    pub fn new(lhs: Symbol, rhs: Vec<RhsElem>, valuator: Option<Valuator>) -> Result<Self, Error> {
        if rhs.is_empty() {
            return Err(Error::InvalidRule);
        }
        let id = NEXT_RULE_ID.fetch_add(1, Ordering::Relaxed);
        Ok(Self(Rc::new(RuleInner {
            id,
            lhs,
            rhs,
            valuator,
        })))
    }

    pub fn id(&self) -> usize {
        self.0.id
    }

    pub fn lhs(&self) -> &Symbol {
        &self.0.lhs
    }

    pub fn rhs(&self) -> &[RhsElem] {
        &self.0.rhs
    }

    pub fn len(&self) -> usize {
        self.0.rhs.len()
    }

    pub fn is_empty(&self) -> bool {
        false // construction rejects empty rhs
    }

    pub fn get(&self, index: usize) -> Option<&RhsElem> {
        self.0.rhs.get(index)
    }

    /// Forward `values` positionally to the valuator, or return
    /// `Value::Unit` if none was supplied. Fails if `values` is not a
    /// positional sequence (`Value::List`).
    pub fn evaluate(&self, values: Value) -> Result<Value, Error> {
        let Value::List(items) = values else {
            return Err(Error::EvaluateInput);
        };
        Ok(match &self.0.valuator {
            Some(f) => f(&items),
            None => Value::Unit,
        })
    }
}

impl Index<usize> for Rule {
    type Output = RhsElem;
    fn index(&self, index: usize) -> &RhsElem {
        &self.0.rhs[index]
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule(#{}, {})", self.0.id, self)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs: Vec<String> = self.0.rhs.iter().map(|e| e.to_string()).collect();
        write!(f, "{} -> {}", self.0.lhs, rhs.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::Terminal;

    #[test]
    fn empty_rhs_is_rejected() {
        let lhs = Symbol::new(Some("A"));
        assert!(matches!(
            Rule::new(lhs, Vec::new(), None),
            Err(Error::InvalidRule)
        ));
    }

    #[test]
    fn non_empty_rhs_preserves_order() {
        let lhs = Symbol::new(Some("A"));
        let rhs = vec![
            RhsElem::Term(Terminal::literal("a")),
            RhsElem::Term(Terminal::literal("b")),
        ];
        let rule = Rule::new(lhs, rhs.clone(), None).unwrap();
        assert_eq!(rule.len(), 2);
        assert_eq!(rule[0], rhs[0]);
        assert_eq!(rule[1], rhs[1]);
    }

    #[test]
    fn distinct_rules_have_distinct_identity() {
        let lhs = Symbol::new(Some("A"));
        let rhs = vec![RhsElem::Term(Terminal::literal("a"))];
        let r1 = Rule::new(lhs.clone(), rhs.clone(), None).unwrap();
        let r2 = Rule::new(lhs, rhs, None).unwrap();
        assert_ne!(r1, r2);
    }

    #[test]
    fn evaluate_without_valuator_returns_unit() {
        let lhs = Symbol::new(Some("A"));
        let rhs = vec![RhsElem::Term(Terminal::literal("a"))];
        let rule = Rule::new(lhs, rhs, None).unwrap();
        assert_eq!(
            rule.evaluate(Value::List(vec![Value::Text("a".into())]))
                .unwrap(),
            Value::Unit
        );
    }

    #[test]
    fn evaluate_rejects_non_list_input() {
        let lhs = Symbol::new(Some("A"));
        let rhs = vec![RhsElem::Term(Terminal::literal("a"))];
        let rule = Rule::new(lhs, rhs, None).unwrap();
        assert!(matches!(
            rule.evaluate(Value::Unit),
            Err(Error::EvaluateInput)
        ));
    }

    #[test]
    fn evaluate_invokes_valuator_with_children() {
        let lhs = Symbol::new(Some("sum"));
        let rhs = vec![RhsElem::Term(Terminal::literal("+"))];
        let valuator: Valuator = Rc::new(|values: &[Value]| {
            let total: f64 = values
                .iter()
                .filter_map(|v| match v {
                    Value::Number(n) => Some(*n),
                    _ => None,
                })
                .sum();
            Value::Number(total)
        });
        let rule = Rule::new(lhs, rhs, Some(valuator)).unwrap();
        let result = rule
            .evaluate(Value::List(vec![Value::Number(2.0), Value::Number(3.0)]))
            .unwrap();
        assert_eq!(result, Value::Number(5.0));
    }
}
