use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use argh::FromArgs;
use log::info;

use crate::earley::RecognizerOptions;
use crate::error::Error;
use crate::tokenizer::tokenize;

use super::{init_logging, load_grammar, print_tree};

/// Read a grammar once, then parse one line at a time from stdin until EOF.
#[derive(FromArgs)]
#[argh(subcommand, name = "repl")]
pub struct Repl {
    /// grammar file, one "LHS -> S1 S2 ... Sk" rule per line
    #[argh(option, short = 'g')]
    grammar: PathBuf,

    /// cap on Earley items per chart state before failing fast
    #[argh(option)]
    max_items: Option<usize>,

    /// increase log verbosity (-v debug, -vv trace)
    #[argh(switch, short = 'v')]
    verbose: u8,
}

impl Repl {
    pub fn run(self) -> Result<(), Error> {
        init_logging(self.verbose);
        let grammar = load_grammar(&self.grammar)?;
        info!("loaded {} rule(s), entering repl", grammar.len());
        let options = RecognizerOptions {
            max_items_per_state: self.max_items,
        };

        let stdin = io::stdin();
        let mut stdout = io::stdout();
        loop {
            print!("> ");
            stdout.flush().ok();
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
                break;
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match crate::parse::parse(line, &grammar, &tokenize, &options) {
                Ok(tree) => print_tree(&tree, 0),
                Err(e) => eprintln!("error: {e}"),
            }
        }
        Ok(())
    }
}
