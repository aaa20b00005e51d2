//! A toy English sentence grammar (determiner, noun, verb, optional
//! prepositional phrase), in the spirit of the teacher's built-in grammar
//! collection, exercising ambiguity: "the dog saw the cat with the telescope"
//! has two derivations depending on what the prepositional phrase attaches
//! to.

use earleybird::earley::RecognizerOptions;
use earleybird::tokenizer::tokenize;
use earleybird::{Grammar, RhsElem, Rule, Symbol, Terminal};

fn word(name: &str, words: &[&str]) -> (Symbol, Vec<Rule>) {
    let sym = Symbol::new(Some(name));
    let rules = words
        .iter()
        .map(|w| Rule::new(sym.clone(), vec![RhsElem::Term(Terminal::literal(w))], None).unwrap())
        .collect();
    (sym, rules)
}

fn grammar() -> Grammar {
    let mut g = Grammar::new();

    let (det, det_rules) = word("det", &["the", "a"]);
    let (noun, noun_rules) = word("noun", &["dog", "cat", "telescope"]);
    let (verb, verb_rules) = word("verb", &["saw"]);
    let (prep, prep_rules) = word("prep", &["with"]);

    for r in det_rules.into_iter().chain(noun_rules).chain(verb_rules).chain(prep_rules) {
        g.add_rule(r);
    }

    let np = Symbol::new(Some("np"));
    let pp = Symbol::new(Some("pp"));
    let vp = Symbol::new(Some("vp"));
    let sentence = Symbol::new(Some("sentence"));

    g.add_rule(Rule::new(np.clone(), vec![RhsElem::Sym(det), RhsElem::Sym(noun)], None).unwrap());
    g.add_rule(Rule::new(np.clone(), vec![RhsElem::Sym(np.clone()), RhsElem::Sym(pp.clone())], None).unwrap());
    g.add_rule(Rule::new(pp.clone(), vec![RhsElem::Sym(prep), RhsElem::Sym(np.clone())], None).unwrap());
    g.add_rule(Rule::new(vp.clone(), vec![RhsElem::Sym(verb), RhsElem::Sym(np.clone())], None).unwrap());
    g.add_rule(Rule::new(vp.clone(), vec![RhsElem::Sym(vp.clone()), RhsElem::Sym(pp)], None).unwrap());
    g.add_rule(Rule::new(sentence, vec![RhsElem::Sym(np), RhsElem::Sym(vp)], None).unwrap());

    g
}

fn main() {
    env_logger::init();
    let g = grammar();
    let options = RecognizerOptions::default();
    for sentence in [
        "the dog saw the cat",
        "the dog saw the cat with the telescope",
    ] {
        match earleybird::parse(sentence, &g, &tokenize, &options) {
            Ok(tree) => println!("{sentence}: parsed as {}", tree.rule.lhs()),
            Err(e) => println!("{sentence}: {e}"),
        }
    }
}
