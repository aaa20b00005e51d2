use argh::FromArgs;

use earleybird::cli::{cmd_parse, cmd_repl};

#[derive(FromArgs)]
/// A general-purpose Earley recognizer and parse-tree constructor
struct Args {
    #[argh(subcommand)]
    subcommand: Subcommand,
}

#[derive(FromArgs)]
/// available subcommands
#[argh(subcommand)]
enum Subcommand {
    Parse(cmd_parse::Parse),
    Repl(cmd_repl::Repl),
}

fn main() {
    let args: Args = argh::from_env();
    let result = match args.subcommand {
        Subcommand::Parse(cmd) => cmd.run(),
        Subcommand::Repl(cmd) => cmd.run(),
    };
    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
