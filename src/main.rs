use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use compound_words::find_longest_compound_word_in;
use compound_words::source::open_word_list;

#[derive(Parser)]
#[command(name = "compound-words")]
#[command(version, about = "Find the longest word in a list that is made of other words in the list")]
pub struct Cli {
    /// Word list, one word per line. Empty lines are ignored
    #[arg(value_name = "WORDFILE")]
    pub wordfile: PathBuf,

    /// Log more to stderr (-v for debug, -vv for trace). RUST_LOG overrides this
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print resolver statistics to stderr after the result
    #[arg(long)]
    pub stats: bool,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let reader = open_word_list(&cli.wordfile)
        .with_context(|| format!("Failed to open {}", cli.wordfile.display()))?;
    let resolution = find_longest_compound_word_in(reader)
        .with_context(|| format!("Failed to process {}", cli.wordfile.display()))?;

    println!("{}", resolution.longest());
    if cli.stats {
        eprintln!("{}", resolution.stats);
    }
    Ok(())
}
