//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build words from the letters of a root word.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{analyze_root, check_words, run_simple, run_survey},
    core::ScorePolicy,
    game::{GameConfig, Session},
    logging::{self, LogTarget},
    output::{print_analysis_result, print_check_result, print_survey_statistics},
    validation::DEFAULT_LANGUAGE,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make words from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list (one word per line); defaults to the built-in list
    #[arg(long, global = true, value_name = "PATH")]
    start_words: Option<PathBuf>,

    /// Dictionary word list (one word per line); defaults to the built-in list
    #[arg(short, long, global = true, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Language tag passed to the dictionary
    #[arg(short, long, global = true, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Reset the score to zero on every new word (default: keep a session score)
    #[arg(long, global = true)]
    reset_score: bool,

    /// Abort if the root word list cannot be loaded instead of using a fallback word
    #[arg(long, global = true)]
    strict: bool,

    /// Seed for picking root words
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check words against a root word
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List every word that can be made from a root word
    Analyze {
        /// Root word to analyze
        root: String,

        /// Print the words, not just the counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Count findable words for every root word
    Survey {
        /// Limit number of root words to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            start_words: self.start_words.clone(),
            dictionary: self.dictionary.clone(),
            language: self.language.clone(),
            score_policy: if self.reset_score {
                ScorePolicy::PerRound
            } else {
                ScorePolicy::Cumulative
            },
            strict: self.strict,
            seed: self.seed,
        }
    }

    fn log_target(&self, command: &Commands) -> LogTarget {
        match (&self.log_file, command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Play) => LogTarget::Off,
            (None, _) => LogTarget::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    logging::init(&cli.log_target(&command))?;

    let config = cli.game_config();

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Check { root, words } => run_check_command(&config, &root, &words),
        Commands::Analyze { root, verbose } => run_analyze_command(&config, &root, verbose),
        Commands::Survey { limit } => run_survey_command(&config, limit),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = Session::from_config(config)?;
    run_tui(App::new(session))
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut session = Session::from_config(config)?;
    run_simple(&mut session)?;
    Ok(())
}

fn run_check_command(config: &GameConfig, root: &str, words: &[String]) -> Result<()> {
    let oracle = config.load_oracle()?;
    let result = check_words(root, words, &oracle, &config.language)?;
    print_check_result(&result);
    Ok(())
}

fn run_analyze_command(config: &GameConfig, root: &str, verbose: bool) -> Result<()> {
    let oracle = config.load_oracle()?;
    let result = analyze_root(root, &oracle, &config.language)?;
    print_analysis_result(&result, verbose);
    Ok(())
}

fn run_survey_command(config: &GameConfig, limit: Option<usize>) -> Result<()> {
    let oracle = config.load_oracle()?;
    let (source, _) = config.startup(&mut config.rng())?;

    println!("\n{}", "═".repeat(70));
    println!(" Root Word Survey ");
    println!("{}", "═".repeat(70));
    println!(
        "\nSurveying {} root words against {} dictionary words",
        limit.unwrap_or(source.len()).min(source.len()),
        oracle.len()
    );
    println!();

    let stats = run_survey(&source, &oracle, &config.language, limit);
    print_survey_statistics(&stats);
    Ok(())
}
