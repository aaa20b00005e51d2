//! The top-level façade (spec.md §4.7): tokenize, recognize, transform,
//! extract, in that order.

use log::debug;

use crate::earley::{recognize, transform, tree};
use crate::error::Error;
use crate::grammar::Grammar;
use crate::tokenizer::Tokenizer;

/// Parse `sentence` against `grammar`, using `tokenizer` to split it into
/// tokens (pass [`crate::tokenizer::tokenize`] for the default behavior) and
/// `options` to bound the recognizer's chart growth.
pub fn parse(
    sentence: &str,
    grammar: &Grammar,
    tokenizer: &Tokenizer,
    options: &recognize::RecognizerOptions,
) -> Result<tree::Tree, Error> {
    let tokens = tokenizer(sentence, grammar)?;
    debug!("parsing {} token(s): {tokens:?}", tokens.len());
    let chart = recognize::recognize(&tokens, grammar, options)?;
    let transformed = transform::transform(&chart);
    tree::extract(&transformed, &tokens)
}
