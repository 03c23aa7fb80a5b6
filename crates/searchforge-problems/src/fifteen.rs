//! The 15-puzzle: sliding tiles on a 4x4 grid.
//!
//! The board holds the values 0..=15 exactly once, with 0 marking the
//! blank cell. A move slides one orthogonal neighbor into the blank. The
//! goal is 1..=15 in row-major order with the blank last.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use searchforge_core::{Result, SearchForgeError, SearchState, Successor};

/// Board side length.
pub const SIDE: usize = 4;

/// The target configuration: 1..=15 row-major, blank last.
const GOAL: [[u8; SIDE]; SIDE] = [
    [1, 2, 3, 4],
    [5, 6, 7, 8],
    [9, 10, 11, 12],
    [13, 14, 15, 0],
];

/// Blank movement order: left, right, up, down.
///
/// The order is part of the contract: the engine breaks frontier ties by
/// insertion order, so successor order determines which optimal path is
/// returned.
const MOVES: [(isize, isize); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A 15-puzzle configuration.
///
/// Immutable once constructed; moves produce new boards. The blank
/// coordinate is located at construction so expansion never rescans the
/// grid.
///
/// # Examples
///
/// Parsing a textual board (0 is the blank):
///
/// ```
/// use searchforge_core::SearchState;
/// use searchforge_problems::FifteenPuzzle;
///
/// let board: FifteenPuzzle = "1 2 3 4\n5 6 7 8\n9 10 0 11\n13 14 15 12"
///     .parse()
///     .unwrap();
/// assert!(!board.is_goal());
/// assert!(board.is_solvable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FifteenPuzzle {
    board: [[u8; SIDE]; SIDE],
    blank: (usize, usize),
}

impl FifteenPuzzle {
    /// Returns the solved configuration.
    pub fn solved() -> Self {
        Self {
            board: GOAL,
            blank: (SIDE - 1, SIDE - 1),
        }
    }

    /// Builds a puzzle from a pre-built grid, validating that the values
    /// are a permutation of 0..=15.
    pub fn from_board(board: [[u8; SIDE]; SIDE]) -> Result<Self> {
        let mut seen = [false; SIDE * SIDE];
        let mut blank = None;
        for (row, line) in board.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if usize::from(value) >= SIDE * SIDE {
                    return Err(SearchForgeError::MalformedInput(format!(
                        "tile value {value} out of range 0..=15"
                    )));
                }
                if seen[usize::from(value)] {
                    return Err(SearchForgeError::MalformedInput(format!(
                        "duplicate tile value {value}"
                    )));
                }
                seen[usize::from(value)] = true;
                if value == 0 {
                    blank = Some((row, col));
                }
            }
        }
        // All 16 cells checked and distinct, so every value is present and
        // the blank exists.
        let blank = blank.ok_or_else(|| {
            SearchForgeError::MalformedInput("board has no blank cell".to_string())
        })?;
        Ok(Self { board, blank })
    }

    /// Returns a board scrambled by a seeded random walk of `moves` blank
    /// moves from the goal.
    ///
    /// Walk length bounds the optimal solution length, and walking from
    /// the goal keeps the result solvable. The same seed always produces
    /// the same board.
    pub fn scrambled(moves: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut current = Self::solved();
        for _ in 0..moves {
            let mut children = current.successors();
            let pick = rng.random_range(0..children.len());
            current = children.swap_remove(pick).state;
        }
        current
    }

    /// Returns the 4x4 grid.
    pub fn board(&self) -> &[[u8; SIDE]; SIDE] {
        &self.board
    }

    /// Returns true if this configuration can reach the goal by legal
    /// moves.
    ///
    /// Standard 4x4 parity criterion: the inversion count of the tiles
    /// (blank excluded, row-major order) must be even exactly when the
    /// blank sits on an odd row counted from the bottom (1-based).
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self
            .board
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != 0)
            .collect();
        let mut inversions = 0usize;
        for i in 0..tiles.len() {
            for j in (i + 1)..tiles.len() {
                if tiles[i] > tiles[j] {
                    inversions += 1;
                }
            }
        }
        let blank_row_from_bottom = SIDE - self.blank.0;
        (blank_row_from_bottom % 2 == 1) == (inversions % 2 == 0)
    }

    /// Goal cell for tile value `v` (1..=15).
    fn goal_cell(v: u8) -> (usize, usize) {
        let row = usize::from(v - 1) / SIDE;
        let col = if v % 4 == 0 {
            SIDE - 1
        } else {
            usize::from(v % 4) - 1
        };
        (row, col)
    }
}

impl SearchState for FifteenPuzzle {
    type Key = [u8; SIDE * SIDE];
    type Cost = u32;

    /// Emits up to four children by sliding a neighbor into the blank, in
    /// left, right, up, down order. Corner blanks yield 2 children, edge
    /// blanks 3, interior blanks 4. Each move costs 1.
    fn successors(&self) -> Vec<Successor<Self>> {
        let (row, col) = self.blank;
        let mut children = Vec::with_capacity(4);
        for (dr, dc) in MOVES {
            let (r, c) = (row as isize + dr, col as isize + dc);
            if r < 0 || r >= SIDE as isize || c < 0 || c >= SIDE as isize {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            let mut board = self.board;
            board[row][col] = board[r][c];
            board[r][c] = 0;
            let child = Self {
                board,
                blank: (r, c),
            };
            children.push(Successor::new(child, 1));
        }
        children
    }

    fn is_goal(&self) -> bool {
        self.board == GOAL
    }

    /// Sum over all non-blank tiles of the Manhattan distance to the
    /// tile's goal cell. Admissible: each move changes one tile's distance
    /// by at most 1.
    fn heuristic(&self) -> u32 {
        let mut h = 0;
        for (row, line) in self.board.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value == 0 {
                    continue;
                }
                let (goal_row, goal_col) = Self::goal_cell(value);
                h += (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32;
            }
        }
        h
    }

    fn key(&self) -> Self::Key {
        let mut key = [0u8; SIDE * SIDE];
        for (i, &value) in self.board.iter().flatten().enumerate() {
            key[i] = value;
        }
        key
    }
}

impl FromStr for FifteenPuzzle {
    type Err = SearchForgeError;

    /// Parses 16 whitespace-separated integers across 4 non-empty lines.
    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != SIDE {
            return Err(SearchForgeError::MalformedInput(format!(
                "expected {SIDE} rows, got {}",
                lines.len()
            )));
        }
        let mut board = [[0u8; SIDE]; SIDE];
        for (row, line) in lines.iter().enumerate() {
            let values: Vec<&str> = line.split_whitespace().collect();
            if values.len() != SIDE {
                return Err(SearchForgeError::MalformedInput(format!(
                    "expected {SIDE} values in row {row}, got {}",
                    values.len()
                )));
            }
            for (col, token) in values.iter().enumerate() {
                board[row][col] = token.parse().map_err(|_| {
                    SearchForgeError::MalformedInput(format!("invalid tile value '{token}'"))
                })?;
            }
        }
        Self::from_board(board)
    }
}

impl fmt::Display for FifteenPuzzle {
    /// Fixed-width rendering: each cell is a space plus a 2-wide
    /// right-aligned value, the blank is all spaces, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.board {
            for &value in line {
                if value == 0 {
                    write!(f, "   ")?;
                } else {
                    write!(f, " {value:>2}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
