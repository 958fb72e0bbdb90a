use std::fs;
use std::path::Path;

use thiserror::Error;

use super::{Cell, CellSet};

/// Failures reading a pattern from text or disk.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("could not read pattern file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected an `x,y` coordinate pair, found {text:?}")]
    InvalidCoordinate { line: usize, text: String },
    #[error("line {line}: unexpected character {character:?} in plaintext pattern")]
    InvalidCharacter { line: usize, character: char },
}

/// A shape given as offsets of its live cells.
/// Offsets may be negative; they are re-centered when loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: String,
    pub cells: Vec<(i32, i32)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, cells: Vec<(i32, i32)>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Midpoint of the bounding box.
    ///
    /// The box is seeded at the origin rather than at the first offset,
    /// so a pattern lying entirely on one side of an axis is pulled
    /// toward it. Division truncates toward zero.
    pub fn center(&self) -> (i32, i32) {
        if self.cells.is_empty() {
            return (0, 0);
        }

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (0, 0, 0, 0);
        for &(x, y) in &self.cells {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        (
            ((min_x as i64 + max_x as i64) / 2) as i32,
            ((min_y as i64 + max_y as i64) / 2) as i32,
        )
    }

    /// Parse one `x,y` (or `x y`) pair per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn parse_offsets(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let mut cells = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let invalid = || PatternError::InvalidCoordinate {
                line: idx + 1,
                text: line.to_string(),
            };

            let mut parts = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|p| !p.is_empty());
            let x: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
            let y: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(invalid)?;
            if parts.next().is_some() {
                return Err(invalid());
            }
            cells.push((x, y));
        }
        Ok(Self::new(name, cells))
    }

    /// Parse the plaintext `.cells` format: `O` or `*` alive, `.` dead,
    /// `!` starts a comment line. Rows grow downward in +y.
    pub fn parse_plaintext(name: impl Into<String>, text: &str) -> Result<Self, PatternError> {
        let mut cells = Vec::new();
        let mut row = 0;
        for (idx, line) in text.lines().enumerate() {
            if line.starts_with('!') {
                continue;
            }
            for (col, ch) in line.trim_end().chars().enumerate() {
                match ch {
                    'O' | 'o' | '*' => cells.push((col as i32, row)),
                    '.' => {}
                    character => {
                        return Err(PatternError::InvalidCharacter {
                            line: idx + 1,
                            character,
                        });
                    }
                }
            }
            row += 1;
        }
        Ok(Self::new(name, cells))
    }

    /// Load from disk. `.cells` files use the plaintext grid format,
    /// anything else is read as a coordinate list.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, PatternError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Custom".to_string());

        let is_plaintext = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("cells"));
        if is_plaintext {
            Self::parse_plaintext(name, &text)
        } else {
            Self::parse_offsets(name, &text)
        }
    }
}

/// Turns patterns into live sets centered on the origin.
pub struct PatternLoader;

impl PatternLoader {
    /// Seed a fresh board with every offset translated by `-center`
    pub fn load(pattern: &Pattern) -> CellSet {
        let (cx, cy) = pattern.center();
        pattern
            .cells
            .iter()
            .map(|&(x, y)| Cell::new(x, y).offset(-cx, -cy))
            .collect()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;
    use rand::Rng;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new("Glider", vec![
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ])
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", vec![(0, 0), (1, 0), (2, 0)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new("Toad", vec![
            (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
        ])
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new("Beacon", vec![
            (0, 0), (1, 0),
            (0, 1),
            (3, 2),
            (2, 3), (3, 3),
        ])
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        let quadrant = [
            (2, 0), (3, 0), (4, 0),
            (0, 2), (0, 3), (0, 4),
            (5, 2), (5, 3), (5, 4),
            (2, 5), (3, 5), (4, 5),
        ];
        // Mirror one quadrant into all four around the (6, 6) axis
        let cells = quadrant
            .iter()
            .flat_map(|&(x, y)| [(x, y), (12 - x, y), (x, 12 - y), (12 - x, 12 - y)])
            .collect();
        Pattern::new("Pulsar", cells)
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new("LWSS", vec![
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ])
    }

    /// Gosper Glider Gun - produces a glider every 30 generations
    pub fn glider_gun() -> Pattern {
        Pattern::new("Gosper Glider Gun", vec![
            // Left square
            (0, 4), (0, 5), (1, 4), (1, 5),
            // Left circle
            (10, 4), (10, 5), (10, 6),
            (11, 3), (11, 7),
            (12, 2), (12, 8),
            (13, 2), (13, 8),
            (14, 5),
            (15, 3), (15, 7),
            (16, 4), (16, 5), (16, 6),
            (17, 5),
            // Middle pieces
            (20, 2), (20, 3), (20, 4),
            (21, 2), (21, 3), (21, 4),
            (22, 1), (22, 5),
            (24, 0), (24, 1), (24, 5), (24, 6),
            // Right square
            (34, 2), (34, 3), (35, 2), (35, 3),
        ])
    }

    /// R-pentomino - methuselah, stabilizes after 1103 generations
    pub fn r_pentomino() -> Pattern {
        Pattern::new("R-pentomino", vec![
            (1, 0), (2, 0),
            (0, 1), (1, 1),
            (1, 2),
        ])
    }

    /// Acorn - methuselah, stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new("Acorn", vec![
            (1, 0),
            (3, 1),
            (0, 2), (1, 2), (4, 2), (5, 2), (6, 2),
        ])
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Random soup filling a `width` x `height` box
    pub fn soup<R: Rng>(width: i32, height: i32, density: f64, rng: &mut R) -> Pattern {
        let density = density.clamp(0.0, 1.0);
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .filter(|_| rng.random_bool(density))
            .collect();
        Pattern::new("Random", cells)
    }

    /// Get all built-in patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider_gun(),
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LifeEngine;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_center_of_offset_square() {
        // Origin seeding widens the box to (0,0)..(4,2)
        let pattern = Pattern::new("Square", vec![(2, 0), (4, 0), (2, 2), (4, 2)]);
        assert_eq!(pattern.center(), (2, 1));
        assert_eq!(
            PatternLoader::load(&pattern),
            set(&[(0, -1), (2, -1), (0, 1), (2, 1)])
        );
    }

    #[test]
    fn test_center_seeds_bounds_at_origin() {
        // True box is (10,10)..(12,12); the origin seed widens it to (0,0)..(12,12)
        let pattern = Pattern::new("Far", vec![(10, 10), (12, 12)]);
        assert_eq!(pattern.center(), (6, 6));

        let negative = Pattern::new("Negative", vec![(-3, -5), (-1, -1)]);
        assert_eq!(negative.center(), (-1, -2));
    }

    #[test]
    fn test_center_truncates_toward_zero() {
        let pattern = Pattern::new("Line", vec![(-3, 0), (0, 0)]);
        assert_eq!(pattern.center(), (-1, 0));
    }

    #[test]
    fn test_empty_pattern_loads_empty_board() {
        let pattern = Pattern::new("Empty", Vec::new());
        assert_eq!(pattern.center(), (0, 0));
        assert!(PatternLoader::load(&pattern).is_empty());
    }

    #[test]
    fn test_duplicate_offsets_collapse() {
        let pattern = Pattern::new("Dup", vec![(0, 0), (0, 0), (1, 0)]);
        assert_eq!(PatternLoader::load(&pattern).len(), 2);
    }

    #[test]
    fn test_parse_offsets() {
        let text = "# blinker\n0,0\n1 0\n\n 2, 0 \n";
        let pattern = Pattern::parse_offsets("Blinker", text).unwrap();
        assert_eq!(pattern.cells, vec![(0, 0), (1, 0), (2, 0)]);
        assert_eq!(pattern.name, "Blinker");
    }

    #[test]
    fn test_parse_offsets_rejects_garbage() {
        let err = Pattern::parse_offsets("Bad", "0,0\n1,x\n").unwrap_err();
        match err {
            PatternError::InvalidCoordinate { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "1,x");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Pattern::parse_offsets("Bad", "1,2,3").is_err());
        assert!(Pattern::parse_offsets("Bad", "7").is_err());
    }

    #[test]
    fn test_parse_plaintext_glider() {
        let text = "!Name: Glider\n.O.\n..O\nOOO\n";
        let pattern = Pattern::parse_plaintext("Glider", text).unwrap();
        assert_eq!(pattern.cells, presets::glider().cells);
    }

    #[test]
    fn test_parse_plaintext_rejects_unknown_character() {
        let err = Pattern::parse_plaintext("Bad", "O.\n.X\n").unwrap_err();
        assert!(matches!(
            err,
            PatternError::InvalidCharacter { line: 2, character: 'X' }
        ));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = Pattern::from_file("/nonexistent/definitely/missing.cells").unwrap_err();
        assert!(matches!(err, PatternError::Io(_)));
    }

    #[test]
    fn test_from_file_reads_plaintext() {
        let path = std::env::temp_dir().join(format!("sparse_life_{}.cells", std::process::id()));
        std::fs::write(&path, "!Block\nOO\nOO\n").unwrap();
        let pattern = Pattern::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(pattern.cells.len(), 4);
        assert!(pattern.name.starts_with("sparse_life_"));
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let board = PatternLoader::load(&presets::pulsar());
        assert_eq!(board.len(), 48);
        let engine = LifeEngine::default();
        assert_ne!(engine.advance(&board), board);
        assert_eq!(engine.advance_n(&board, 3), board);
    }

    #[test]
    fn test_presets_are_unique_and_nonempty() {
        let patterns = presets::all_patterns();
        for pattern in &patterns {
            assert!(!pattern.cells.is_empty(), "{} is empty", pattern.name);
            let board = PatternLoader::load(pattern);
            assert_eq!(board.len(), pattern.cells.len(), "{} has duplicates", pattern.name);
        }
    }

    #[test]
    fn test_soup_respects_bounds_and_density() {
        let mut rng = StdRng::seed_from_u64(1);
        let soup = presets::soup(10, 5, 1.0, &mut rng);
        assert_eq!(soup.cells.len(), 50);
        assert!(soup.cells.iter().all(|&(x, y)| (0..10).contains(&x) && (0..5).contains(&y)));

        assert!(presets::soup(10, 5, 0.0, &mut rng).cells.is_empty());
    }
}
