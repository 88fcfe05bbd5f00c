//! `document` — assembly of a finished puzzle into a printable text page.
//!
//! This is the peripheral half of the crate: it consumes a read-only grid and
//! the placed-word list, substitutes tags into a page template, and writes a
//! numbered file into the output directory. Nothing here feeds back into
//! placement.
//!
//! Templates are plain text with five tags: `[ID]`, `[TITLE]`,
//! `[DIFFICULTY]`, `[INFO]`, `[GRID]` and `[WORDS]`. A custom template can be
//! loaded from disk; if it cannot be read we log a warning and fall back to
//! the built-in page rather than failing the run. Templates missing the
//! `[GRID]` or `[WORDS]` tags get those sections appended at the end, so a
//! sloppy template still yields a complete puzzle.

use crate::difficulty::Difficulty;
use crate::errors::PuzzleError;
use crate::grid::Grid;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Columns the word list is laid out in.
pub const DEFAULT_LIST_COLUMNS: usize = 4;

/// Checkbox glyph printed before each word so solvers can tick them off.
const CHECKBOX: &str = "☐";

/// Filename prefix and extension for saved puzzles: `puzzle-<n>.txt`.
const FILE_PREFIX: &str = "puzzle-";
const FILE_EXT: &str = ".txt";

/// The page used when no custom template is supplied.
const DEFAULT_TEMPLATE: &str = "\
Word Search #[ID]: [TITLE]
Difficulty: [DIFFICULTY] [INFO]

[GRID]

[WORDS]
";

/// Everything the renderer needs to know about one finished puzzle.
///
/// Borrowed rather than owned: the caller keeps the engine's grid and word
/// collections, and rendering never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct PuzzlePage<'a> {
    pub grid: &'a Grid,
    /// Successfully placed words; these make up the printed word list.
    pub placed: &'a [String],
    pub difficulty: Difficulty,
    pub puzzle_id: usize,
    pub title: &'a str,
    /// Columns for the word-list table.
    pub list_columns: usize,
}

/// Loads a template from `path`, falling back to the built-in page if `path`
/// is `None` or unreadable. The fallback is logged, not raised: a broken
/// template should not cost the user an already-generated puzzle.
#[must_use]
pub fn load_template(path: Option<&Path>) -> String {
    match path {
        None => DEFAULT_TEMPLATE.to_string(),
        Some(p) => match fs::read_to_string(p) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("cannot read template '{}': {e}; using built-in page", p.display());
                DEFAULT_TEMPLATE.to_string()
            }
        },
    }
}

/// Renders `page` through `template`, substituting all tags.
#[must_use]
pub fn render(page: &PuzzlePage<'_>, template: &str) -> String {
    let info = format!(
        "({size}x{size} / {count} words)",
        size = page.grid.size(),
        count = page.placed.len()
    );

    let mut out = template
        .replace("[ID]", &page.puzzle_id.to_string())
        .replace("[TITLE]", page.title)
        .replace("[DIFFICULTY]", page.difficulty.name())
        .replace("[INFO]", &info);

    let grid_section = render_grid(page.grid);
    let words_section = render_word_list(page.placed, page.list_columns);

    // Missing placeholders degrade to appended sections instead of a
    // gridless page.
    if out.contains("[GRID]") {
        out = out.replace("[GRID]", &grid_section);
    } else {
        out.push('\n');
        out.push_str(&grid_section);
        out.push('\n');
    }
    if out.contains("[WORDS]") {
        out = out.replace("[WORDS]", &words_section);
    } else {
        out.push('\n');
        out.push_str(&words_section);
        out.push('\n');
    }

    out
}

/// One row per line, letters separated by single spaces.
fn render_grid(grid: &Grid) -> String {
    grid.to_string()
}

/// The "Words to find:" table: alphabetically sorted, `columns` words per
/// row, each padded to the longest word so the columns line up in a
/// monospaced font.
fn render_word_list(placed: &[String], columns: usize) -> String {
    let mut section = String::from("Words to find:\n");
    if placed.is_empty() {
        return section;
    }

    let mut sorted: Vec<&String> = placed.iter().collect();
    sorted.sort();

    let columns = columns.max(1);
    let width = sorted.iter().map(|w| w.chars().count()).max().unwrap_or(0);

    for row in sorted.chunks(columns) {
        let line: Vec<String> = row
            .iter()
            .map(|word| format!("{CHECKBOX} {word:<width$}"))
            .collect();
        section.push_str(line.join("   ").trim_end());
        section.push('\n');
    }

    section
}

/// Next free puzzle id in `dir`: one past the highest existing
/// `puzzle-<n>.txt`, or 1 for a fresh (or missing) directory.
#[must_use]
pub fn next_puzzle_id(dir: &Path) -> usize {
    let names = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect(),
        Err(_) => Vec::new(),
    };
    max_existing_id(names.iter().map(String::as_str)) + 1
}

/// Highest `<n>` among names shaped `puzzle-<n>.txt`; 0 if none match.
fn max_existing_id<'a>(names: impl Iterator<Item = &'a str>) -> usize {
    names
        .filter_map(|name| {
            name.strip_prefix(FILE_PREFIX)?
                .strip_suffix(FILE_EXT)?
                .parse::<usize>()
                .ok()
        })
        .max()
        .unwrap_or(0)
}

/// Writes `contents` as `puzzle-<id>.txt` under `dir`, creating the
/// directory if needed. Returns the path written.
///
/// # Errors
/// Returns [`PuzzleError::WriteFailed`] if the directory cannot be created
/// or the file cannot be written.
pub fn save(dir: &Path, puzzle_id: usize, contents: &str) -> Result<PathBuf, PuzzleError> {
    fs::create_dir_all(dir).map_err(|e| PuzzleError::WriteFailed {
        path: dir.display().to_string(),
        source: e,
    })?;

    let path = dir.join(format!("{FILE_PREFIX}{puzzle_id}{FILE_EXT}"));
    fs::write(&path, contents).map_err(|e| PuzzleError::WriteFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(path)
}
