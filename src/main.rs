use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use gridseek::difficulty::Difficulty;
use gridseek::document::{self, PuzzlePage, DEFAULT_LIST_COLUMNS};
use gridseek::engine::Engine;
use gridseek::errors::PuzzleError;
use gridseek::word_list::WordList;

/// Word-search puzzle generator
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Path to the word list (one word per line)
    #[arg(short, long, default_value = "data/words.txt")]
    word_list: PathBuf,

    /// Side length of the square grid
    #[arg(short = 's', long, default_value_t = 28)]
    grid_size: usize,

    /// Difficulty tier: Easy, Medium, Hard or Impossible
    /// (anything else falls back to a default word count)
    #[arg(short, long, default_value = "Medium")]
    difficulty: String,

    /// Random placement attempts allowed per word and direction
    #[arg(long, default_value_t = 1000)]
    max_attempts: usize,

    /// Seed for reproducible puzzles; omit for a fresh one each run
    #[arg(long)]
    seed: Option<u64>,

    /// Directory the numbered puzzle files are written to
    #[arg(short, long, default_value = "puzzles")]
    output_dir: PathBuf,

    /// Optional page template with [ID]/[TITLE]/[DIFFICULTY]/[INFO]/[GRID]/[WORDS] tags
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Title printed on the puzzle page
    #[arg(long, default_value = "Word Search")]
    title: String,

    /// Columns in the printed word list
    #[arg(long, default_value_t = DEFAULT_LIST_COLUMNS)]
    list_columns: usize,
}

/// Entry point of the gridseek CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them in a
/// user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("GRIDSEEK_DEBUG").is_ok();
    gridseek::logging::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print with code and help text so failures are self-explanatory
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the gridseek CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Generate the puzzle (placement plus noise fill).
/// 4. Render the page template and save it as the next numbered file.
/// 5. Print a summary (placed/skipped counts, timing, output path).
fn try_main() -> Result<(), PuzzleError> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk
    let word_list = WordList::load_from_path(&cli.word_list)?;
    log::info!("loaded {} words from '{}'", word_list.len(), cli.word_list.display());

    // 2. Generate the puzzle
    let difficulty = Difficulty::from(cli.difficulty.as_str());
    let mut engine = match cli.seed {
        Some(seed) => Engine::with_seed(cli.grid_size, cli.max_attempts, seed)?,
        None => Engine::new(cli.grid_size, cli.max_attempts)?,
    };

    let t_generate = Instant::now();
    let (placed, skipped) = engine.generate(&word_list.words, difficulty);
    let generate_secs = t_generate.elapsed().as_secs_f64();

    if !skipped.is_empty() {
        eprintln!("Could not place ({}): {}", skipped.len(), skipped.join(", "));
    }

    // 3. Render and save the document
    let template = document::load_template(cli.template.as_deref());
    let puzzle_id = document::next_puzzle_id(&cli.output_dir);
    let page = PuzzlePage {
        grid: engine.grid(),
        placed: &placed,
        difficulty,
        puzzle_id,
        title: &cli.title,
        list_columns: cli.list_columns,
    };
    let contents = document::render(&page, &template);
    let saved_path = document::save(&cli.output_dir, puzzle_id, &contents)?;

    // 4. Print the summary to stderr, the saved path to stdout
    eprintln!(
        "Placed {}/{} words on a {size}x{size} grid in {generate_secs:.3}s.",
        placed.len(),
        placed.len() + skipped.len(),
        size = cli.grid_size
    );
    println!("{}", saved_path.display());

    Ok(())
}
