use clap::Parser;

use normform::config::Config;
use normform::convert;
use normform::error::Error;
use normform::types::Mode;

/// Convert a propositional sentence into simplified CNF (default) or DNF.
///
/// Connectives, tightest first: `~`, `&&`, `||`, `=>`. Everything else is a term name;
/// spaces are ignored.
#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Sentence to convert, e.g. 'a => b && c'.
    #[arg(value_name = "SENTENCE")]
    sentence: String,

    /// Output form: `dnf` (any case) for DNF, anything else for CNF.
    #[arg(value_name = "MODE")]
    mode: Option<String>,

    /// Largest number of distinct terms to accept.
    #[arg(long, value_name = "INT", default_value_t = Config::DEFAULT_MAX_TERMS)]
    max_terms: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    log::info!("args = {:?}", args);

    let config = Config::default()
        .with_mode(Mode::from_arg(args.mode.as_deref()))
        .with_max_terms(args.max_terms);

    match convert(&args.sentence, &config) {
        Ok(predicate) => {
            println!("{}", predicate);
            Ok(())
        }
        Err(Error::InvalidSentence) => {
            println!("{}", Error::InvalidSentence);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
