//! Word Scramble - CLI
//!
//! Build words from the letters of a random root word, in a TUI or line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use word_scramble::{
    commands::{check_words, list_roots, run_simple},
    config::GameConfig,
    core::Game,
    logging,
    output::{print_check_report, print_roots},
    wordlists::{WordListDictionary, WordSource},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Root word list (one word per line); the built-in list is used if unset
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Dictionary file (one word per line), e.g. /usr/share/dict/words
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Language code for spell checking
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Seed for reproducible root words
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Check words against a given root word
    Check {
        /// The root word
        #[arg(short, long)]
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },

    /// List the candidate root words
    Roots,
}

/// Load the config file, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(path) = &cli.wordlist {
        config.start_words = Some(path.clone());
    }
    if let Some(path) = &cli.dictionary {
        config.dictionary = Some(path.clone());
    }
    if let Some(language) = &cli.language {
        config.language.clone_from(language);
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    logging::init(&config.log_file)?;
    info!(?config, "Starting word_scramble");

    config
        .verify_word_source()
        .context("Root word list is required but unusable")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { root, words } => run_check_command(&config, &root, &words),
        Commands::Roots => run_roots_command(&config),
    }
}

fn new_game(config: &GameConfig) -> Result<Game<WordListDictionary, Box<dyn WordSource>>> {
    let checker = config
        .spell_checker()
        .context("Failed to load dictionary")?;
    Ok(Game::new(
        checker,
        config.word_source(),
        config.language.clone(),
        config.seed,
    ))
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(new_game(config)?);
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = new_game(config)?;
    run_simple(&mut game).context("Simple mode failed")?;
    Ok(())
}

fn run_check_command(config: &GameConfig, root: &str, words: &[String]) -> Result<()> {
    let checker = config
        .spell_checker()
        .context("Failed to load dictionary")?;
    let report = check_words(root, words, &checker, &config.language);
    print_check_report(&report);
    Ok(())
}

fn run_roots_command(config: &GameConfig) -> Result<()> {
    let roots = list_roots(&config.word_source())?;
    print_roots(&roots);
    Ok(())
}
