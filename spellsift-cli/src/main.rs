//! spellsift CLI - word-list spell checker
//!
//! Prints every word of a document that is missing from a dictionary file,
//! one per line, in document order.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use spellsift_core::{read_dictionary, read_document, Alphabet, Error, SpellChecker};
use spellsift_types::{DEFAULT_PUNCTUATION, DEFAULT_WORD_CHARACTERS};

#[derive(Parser, Debug)]
#[command(name = "spellsift")]
#[command(version)]
#[command(about = "Report document words that are not in a dictionary", long_about = None)]
struct Cli {
    /// Document file to be checked
    document: PathBuf,

    /// Dictionary file with one valid word per line
    dictionary: PathBuf,

    /// Characters stripped from words before checking
    #[arg(long, default_value = DEFAULT_PUNCTUATION, allow_hyphen_values = true)]
    punctuation: String,

    /// Characters that make a token count as a word
    #[arg(long, default_value = DEFAULT_WORD_CHARACTERS, allow_hyphen_values = true)]
    word_characters: String,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(&cli) {
        Ok(unmatched) => {
            for word in unmatched {
                println!("{}", word);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Vec<String>, Error> {
    let alphabet = Alphabet::new(&cli.punctuation, &cli.word_characters);
    debug!(
        "alphabet: {} punctuation, {} word characters",
        alphabet.punctuation().len(),
        alphabet.word_characters().len()
    );

    let dictionary = read_dictionary(&cli.dictionary)?;
    debug!(
        "read {} dictionary entries from {}",
        dictionary.len(),
        cli.dictionary.display()
    );

    let document = read_document(&cli.document)?;
    debug!(
        "read {} bytes from {}",
        document.len(),
        cli.document.display()
    );

    let checker = SpellChecker::with_alphabet(&dictionary, alphabet)?;
    let (unmatched, stats) = checker.check_with_stats(&document);
    info!("{}", stats);

    Ok(unmatched)
}
