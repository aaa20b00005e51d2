//! The arithmetic grammar worked through spec.md §8: sums of products of
//! parenthesized sums or integers, with valuators that fold a tree of
//! tokens straight down to its numeric result.

use std::rc::Rc;

use earleybird::earley::{Child, RecognizerOptions, Tree};
use earleybird::tokenizer::tokenize;
use earleybird::{Grammar, RhsElem, Rule, Symbol, Terminal, Value};

fn grammar() -> Grammar {
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
            Some(Rc::new(|values: &[Value]| match values {
                [Value::Number(a), _, Value::Number(b)] => Value::Number(a + b),
                _ => Value::Unit,
            })),
        )
        .unwrap(),
    );
    g.add_rule(Rule::new(sum.clone(), vec![RhsElem::Sym(prod.clone())], None).unwrap());
    g.add_rule(
        Rule::new(
            prod.clone(),
            vec![
                RhsElem::Sym(prod.clone()),
                RhsElem::Term(Terminal::literal("*")),
                RhsElem::Sym(factor.clone()),
            ],
            Some(Rc::new(|values: &[Value]| match values {
                [Value::Number(a), _, Value::Number(b)] => Value::Number(a * b),
                _ => Value::Unit,
            })),
        )
        .unwrap(),
    );
    g.add_rule(Rule::new(prod.clone(), vec![RhsElem::Sym(factor.clone())], None).unwrap());
    g.add_rule(
        Rule::new(
            factor.clone(),
            vec![
                RhsElem::Term(Terminal::literal("(")),
                RhsElem::Sym(sum),
                RhsElem::Term(Terminal::literal(")")),
            ],
            Some(Rc::new(|values: &[Value]| values[1].clone())),
        )
        .unwrap(),
    );
    g.add_rule(
        Rule::new(
            factor,
            vec![RhsElem::Term(Terminal::pattern(r"\d+", "").unwrap())],
            Some(Rc::new(|values: &[Value]| match &values[0] {
                Value::Text(text) => Value::Number(text.parse().unwrap_or(f64::NAN)),
                _ => Value::Unit,
            })),
        )
        .unwrap(),
    );
    g
}

/// Fold a tree bottom-up through its rule's valuator, turning each leaf
/// token into `Value::Text` before it reaches its parent's valuator.
fn evaluate(tree: &Tree) -> Value {
    let values: Vec<Value> = tree
        .children
        .iter()
        .map(|child| match child {
            Child::Token(token) => Value::Text(token.clone()),
            Child::Node(node) => evaluate(node),
        })
        .collect();
    tree.rule.evaluate(Value::List(values)).unwrap_or(Value::Unit)
}

fn main() {
    env_logger::init();
    let g = grammar();
    let options = RecognizerOptions::default();
    for sentence in ["2 * 3", "23 + (32 * 46)", "((12))"] {
        let tree = earleybird::parse(sentence, &g, &tokenize, &options).unwrap();
        println!("{sentence} = {:?}", evaluate(&tree));
    }
}
