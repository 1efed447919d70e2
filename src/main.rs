//! Jordle - CLI
//!
//! Word guessing game with TUI and line-based modes, plus tools for scoring
//! single guesses and auditing word lists.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jordle::{
    commands::{check_word_lists, run_simple, score_words},
    game::{GuessEngine, Statistics, WordBank},
    output::{print_check_report, print_score_result, write_statistics},
    wordlists::{ALLOWED, ANSWERS, WordListSource, load_bank},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "jordle",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Candidate secrets: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: WordListSource,

    /// Acceptable guesses: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'a', long, global = true, default_value = "embedded")]
    allowed: WordListSource,

    /// Seed for secret selection (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score a guess against a secret
    Score {
        /// The guessed word
        guess: String,

        /// The secret word
        secret: String,
    },

    /// Audit the word lists and the scorer
    Check {
        /// Acceptable guesses scored against every candidate
        #[arg(short, long, default_value = "64")]
        probes: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let bank = load_bank(&cli.wordlist, &cli.allowed)?;
            run_play_command(&bank, cli.seed)
        }
        Commands::Simple => {
            let bank = load_bank(&cli.wordlist, &cli.allowed)?;
            run_simple_command(&bank, cli.seed)
        }
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Check { probes } => run_check_command(&cli.wordlist, &cli.allowed, probes),
    }
}

fn new_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(bank: &WordBank, seed: Option<u64>) -> Result<()> {
    use jordle::interactive::{App, run_tui};

    let engine = GuessEngine::new(bank, new_rng(seed))?;
    let stats = run_tui(App::new(engine))?;

    if stats.total_games > 0 {
        write_statistics(&mut io::stdout(), &stats)?;
    }
    Ok(())
}

fn run_simple_command(bank: &WordBank, seed: Option<u64>) -> Result<()> {
    let mut engine = GuessEngine::new(bank, new_rng(seed))?;
    let mut stats = Statistics::default();

    run_simple(&mut engine, &mut stats, io::stdin().lock(), io::stdout())
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score_words(guess, secret)
        .with_context(|| format!("Cannot score '{guess}' against '{secret}'"))?;
    print_score_result(&result);
    Ok(())
}

fn run_check_command(
    answers: &WordListSource,
    allowed: &WordListSource,
    probes: usize,
) -> Result<()> {
    let answer_list = answers.load(ANSWERS)?;
    let allowed_list = allowed.load(ALLOWED)?;

    println!(
        "\nChecking {} candidates ({answers}) against {} guesses ({allowed})\n",
        answer_list.words.len(),
        allowed_list.words.len()
    );

    let report = check_word_lists(&answer_list, &allowed_list, probes, true);
    print_check_report(&report);

    if report.is_clean() {
        Ok(())
    } else {
        anyhow::bail!("{} issue(s) found", report.issue_count())
    }
}
