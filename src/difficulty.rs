//! `difficulty` — difficulty tiers and the word-count scaling they imply.
//!
//! A tier does not change the placement algorithm at all; it only decides how
//! many words the engine tries to fit. Counts scale with grid area relative
//! to a reference grid of side 28, so a "Medium" 56×56 puzzle carries four
//! times the words of a "Medium" 28×28 one.
//!
//! Unrecognized tier names map to [`Difficulty::Unknown`] rather than a parse
//! error, and `Unknown` carries its own fixed word count. This keeps the
//! fallback a first-class, testable case instead of a silent branch.

use std::fmt;
use std::str::FromStr;

/// Area of the reference grid the scaling formulas are normalized against.
const BASE_AREA: f64 = 28.0 * 28.0;

/// Ceiling used by the Easy tier, in practice "every supplied word".
const EASY_CEILING: usize = 100;

/// How hard the finished puzzle should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    /// As many words as the list supplies, up to a large ceiling.
    Easy,
    #[default]
    Medium,
    Hard,
    /// A single word hidden in a full grid of noise.
    Impossible,
    /// Fallback for unrecognized tier names.
    Unknown,
}

impl Difficulty {
    /// Target number of words for a grid of side `grid_size`.
    ///
    /// Counts are proportional to grid area, normalized against the 28×28
    /// reference grid, with per-tier floors so small grids still get a
    /// playable handful of words. The float-to-integer conversion truncates;
    /// the scaling tables are pinned on that (see the tests below), so do not
    /// switch it to rounding.
    #[must_use]
    pub fn word_count(self, grid_size: usize) -> usize {
        let scale = (grid_size * grid_size) as f64 / BASE_AREA;
        match self {
            Difficulty::Easy => EASY_CEILING,
            Difficulty::Medium => usize::max(3, (20.0 * scale) as usize),
            Difficulty::Hard => usize::max(2, (10.0 * scale) as usize),
            Difficulty::Impossible => 1,
            Difficulty::Unknown => 20,
        }
    }

    /// Human-readable tier name, as shown in rendered documents.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
            Difficulty::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Difficulty {
    /// Case-insensitive tier lookup; anything unrecognized becomes
    /// [`Difficulty::Unknown`].
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            "impossible" => Difficulty::Impossible,
            _ => Difficulty::Unknown,
        }
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_grid_counts() {
        assert_eq!(Difficulty::Medium.word_count(28), 20);
        assert_eq!(Difficulty::Hard.word_count(28), 10);
        assert_eq!(Difficulty::Easy.word_count(28), 100);
        assert_eq!(Difficulty::Unknown.word_count(28), 20);
    }

    #[test]
    fn test_impossible_is_always_one_word() {
        for size in [3, 10, 28, 56, 100] {
            assert_eq!(Difficulty::Impossible.word_count(size), 1);
        }
    }

    #[test]
    fn test_area_scaling_quadruples_with_doubled_side() {
        // 56×56 has four times the area of 28×28
        assert_eq!(Difficulty::Medium.word_count(56), 80);
        assert_eq!(Difficulty::Hard.word_count(56), 40);
    }

    #[test]
    fn test_small_grids_hit_the_tier_floor() {
        // 3×3: scaled Medium count is 0, floor lifts it to 3
        assert_eq!(Difficulty::Medium.word_count(3), 3);
        // 10×10: scaled Hard count is 1, floor lifts it to 2
        assert_eq!(Difficulty::Hard.word_count(10), 2);
    }

    #[test]
    fn test_scaling_truncates_rather_than_rounds() {
        // 30×30: 20 × (900/784) = 22.96, which must truncate to 22
        assert_eq!(Difficulty::Medium.word_count(30), 22);
        // 40×40: 10 × (1600/784) = 20.41 → 20
        assert_eq!(Difficulty::Hard.word_count(40), 20);
    }

    #[test]
    fn test_tier_names_parse_case_insensitively() {
        assert_eq!(Difficulty::from("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from("MEDIUM"), Difficulty::Medium);
        assert_eq!(Difficulty::from(" Hard "), Difficulty::Hard);
        assert_eq!(Difficulty::from("Impossible"), Difficulty::Impossible);
    }

    #[test]
    fn test_unrecognized_tier_falls_back_to_unknown() {
        assert_eq!(Difficulty::from("banana"), Difficulty::Unknown);
        assert_eq!(Difficulty::from(""), Difficulty::Unknown);
        // and the fallback has its own count rather than erroring
        assert_eq!(Difficulty::from("banana").word_count(28), 20);
    }

    #[test]
    fn test_display_matches_tier_name() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::Unknown.to_string(), "Unknown");
    }
}
