use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use boardgame_stats::export;
use boardgame_stats::loader;
use boardgame_stats::summary;
use boardgame_stats::winrate;

#[derive(Parser)]
#[command(name = "boardgame-stats")]
#[command(about = "Inspect board game play history exports and compare wins to expectation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report each player's actual wins against their expected wins
    Winrate {
        /// JSON export file
        #[arg(env = "BGSTATS_FILE")]
        input: Option<PathBuf>,

        /// Also write the report to a .csv or .xlsx file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print every play with player names and results (prompts for the file if omitted)
    Plays {
        /// JSON export file
        input: Option<PathBuf>,
    },

    /// Describe the structure of a JSON file
    Structure {
        /// Any JSON file
        input: PathBuf,
    },

    /// Check that every play refers to known players and games
    Validate {
        /// JSON export file
        input: PathBuf,
    },

    /// Display counts and a sample of names from an export
    Info {
        /// JSON export file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Winrate { input, output } => {
            winrate_report(input.as_deref(), output.as_deref())?;
        }
        Commands::Plays { input } => {
            let input = match input {
                Some(path) => path,
                None => prompt_for_path()?,
            };
            print_plays(&input)?;
        }
        Commands::Structure { input } => {
            structure(&input)?;
        }
        Commands::Validate { input } => {
            validate(&input)?;
        }
        Commands::Info { input } => {
            info(&input)?;
        }
    }

    Ok(())
}

fn winrate_report(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let Some(input) = input else {
        println!("Enter the JSON dump file path as a command line argument.");
        return Ok(());
    };

    let stats = loader::load_stats(input).context("Failed to load stats file")?;
    let rates = winrate::compute_win_rates(&stats).context("Failed to compute win rates")?;

    for player in &rates {
        println!("{}", player);
    }

    if let Some(output) = output {
        export::write_report(&rates, output).context("Failed to write report")?;
        eprintln!("Report written to: {}", output.display());
    }

    Ok(())
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter relative file path: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read file path")?;

    Ok(PathBuf::from(line.trim()))
}

fn print_plays(input: &Path) -> Result<()> {
    let stats = loader::load_stats(input).context("Failed to load stats file")?;

    for (idx, play) in stats.plays.iter().enumerate() {
        let text = stats
            .render_play(play)
            .with_context(|| format!("Failed to describe play {}", idx + 1))?;
        println!("{}", text);
    }

    Ok(())
}

fn structure(input: &Path) -> Result<()> {
    let raw = loader::read_json(input).context("Failed to read JSON file")?;
    print!("{}", summary::structure_summary(&raw));
    Ok(())
}

fn validate(input: &Path) -> Result<()> {
    let stats = loader::load_stats(input).context("Failed to load stats file")?;
    println!("Stats file is valid JSON");
    println!("  {} players", stats.players.len());
    println!("  {} games", stats.games.len());
    println!("  {} plays", stats.plays.len());

    let dangling = stats.dangling_references();
    if dangling.is_empty() {
        println!("  No issues found");
        return Ok(());
    }

    println!("  Issues found:");
    for issue in &dangling {
        println!("    - {}", issue);
    }
    anyhow::bail!("{} unresolved references", dangling.len());
}

fn info(input: &Path) -> Result<()> {
    let stats = loader::load_stats(input).context("Failed to load stats file")?;
    println!("Stats File: {}", input.display());
    println!();

    println!("Players: {}", stats.players.len());
    print_sample(stats.players.names(), stats.players.len());
    println!();

    println!("Games: {}", stats.games.len());
    print_sample(stats.games.names(), stats.games.len());
    println!();

    println!("Plays: {}", stats.plays.len());
    if let (Some(first), Some(last)) = (stats.plays.first(), stats.plays.last()) {
        println!("  First: {}", first.date);
        println!("  Last: {}", last.date);
    }

    Ok(())
}

fn print_sample<'a>(names: impl Iterator<Item = &'a str>, total: usize) {
    for name in names.take(10) {
        println!("  {}", name);
    }
    if total > 10 {
        println!("  ... and {} more", total - 10);
    }
}
