use std::path::PathBuf;

use argh::FromArgs;

use crate::earley::RecognizerOptions;
use crate::error::Error;
use crate::tokenizer::tokenize;

use super::{init_logging, load_grammar, print_tree, resolve_input};

/// Parse one sentence against a grammar and print its tree.
#[derive(FromArgs)]
#[argh(subcommand, name = "parse")]
pub struct Parse {
    /// grammar file, one "LHS -> S1 S2 ... Sk" rule per line
    #[argh(option, short = 'g')]
    grammar: PathBuf,

    /// input file, or the sentence itself if no such file exists
    #[argh(option, short = 'i')]
    input: String,

    /// cap on Earley items per chart state before failing fast
    #[argh(option)]
    max_items: Option<usize>,

    /// increase log verbosity (-v debug, -vv trace)
    #[argh(switch, short = 'v')]
    verbose: u8,
}

impl Parse {
    pub fn run(self) -> Result<(), Error> {
        init_logging(self.verbose);
        let grammar = load_grammar(&self.grammar)?;
        let sentence = resolve_input(&self.input)?;
        let options = RecognizerOptions {
            max_items_per_state: self.max_items,
        };
        let tree = crate::parse::parse(&sentence, &grammar, &tokenize, &options)?;
        print_tree(&tree, 0);
        Ok(())
    }
}
