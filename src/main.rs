use clap::Parser;
use gocalc::diagnostic::{DefaultReporter, PlainReporter, Reporter};
use gocalc::session::DEFAULT_PROMPT;
use gocalc::{Outcome, Session, SessionConfig};
use std::io;
use std::process;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[command(version, about = "Renders arithmetic expressions as prefix trees", long_about = None)]
struct Args {
    /// Text printed before each line is read
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Exit with status 1 on the first lex or syntax error
    #[arg(long)]
    fatal: bool,

    /// Reject input left over after a complete expression
    #[arg(long)]
    strict: bool,

    /// Print the parsed tree under each result
    #[arg(long)]
    tree: bool,

    /// Print diagnostics without ANSI colors
    #[arg(long)]
    no_color: bool,
}

impl Args {
    fn config(&self) -> SessionConfig {
        SessionConfig {
            prompt: self.prompt.clone(),
            fatal: self.fatal,
            strict: self.strict,
            tree: self.tree,
        }
    }
}

fn main() -> Result<(), io::Error> {
    env_logger::init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    let reporter: Rc<dyn Reporter> = if args.fatal {
        PlainReporter::new()
    } else {
        DefaultReporter::new()
    };

    let session = Session::new(args.config(), reporter);
    let stdin = io::stdin();
    match session.run(stdin.lock(), &mut io::stdout())? {
        Outcome::Finished => Ok(()),
        Outcome::Aborted => process::exit(1),
    }
}
