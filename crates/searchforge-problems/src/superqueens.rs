//! Superqueens placement: n-queens where queens also attack like knights.
//!
//! Queens are placed column by column, left to right, one per row. A pair
//! of queens conflicts when they share a diagonal or sit a knight's move
//! apart. The accumulated search cost counts conflicting pairs, so the
//! engine returns the minimum-conflict complete placement; a zero-cost
//! goal is a proper solution.

use std::fmt;

use smallvec::SmallVec;

use searchforge_core::{Result, SearchForgeError, SearchState, Successor};

/// A queen placement: row and column on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

impl Placement {
    /// Creates a placement at the given row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Inline-capacity list of placements; boards up to 8x8 stay off the heap.
pub type PlacementList = SmallVec<[Placement; 8]>;

/// A partial superqueens placement.
///
/// Columns are filled strictly left to right: the next queen always lands
/// in column `queens().len()`, on a row no earlier queen uses. Because of
/// this, each candidate only needs checking against the queens already on
/// the board, never the reverse.
///
/// # Examples
///
/// ```
/// use searchforge_core::SearchState;
/// use searchforge_problems::SuperqueensBoard;
///
/// let root = SuperqueensBoard::new(4).unwrap();
/// assert_eq!(root.successors().len(), 4);
/// assert!(!root.is_goal());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuperqueensBoard {
    n: usize,
    queens: PlacementList,
}

impl SuperqueensBoard {
    /// Creates an empty n x n board.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(SearchForgeError::MalformedInput(
                "board size must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            n,
            queens: PlacementList::new(),
        })
    }

    /// Returns the board size.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the placements made so far, in column order.
    #[inline]
    pub fn queens(&self) -> &[Placement] {
        &self.queens
    }

    /// Counts the queens already on the board that attack the given cell.
    ///
    /// Every existing queen sits in a column strictly left of `col`, so
    /// only the backward diagonal and knight offsets can apply.
    fn attacks_on(&self, row: usize, col: usize) -> u32 {
        let mut count = 0;
        for queen in &self.queens {
            let row_diff = queen.row.abs_diff(row);
            let col_diff = col - queen.col;
            let diagonal = row_diff == col_diff;
            let knight = (col_diff == 1 && row_diff == 2) || (col_diff == 2 && row_diff == 1);
            if diagonal || knight {
                count += 1;
            }
        }
        count
    }

    /// Returns the total number of conflicting pairs on the board.
    ///
    /// Recounts from scratch; equals the sum of the step costs that built
    /// this placement.
    pub fn conflicts(&self) -> u32 {
        let mut total = 0;
        for (i, queen) in self.queens.iter().enumerate() {
            let earlier = Self {
                n: self.n,
                queens: self.queens[..i].iter().copied().collect(),
            };
            total += earlier.attacks_on(queen.row, queen.col);
        }
        total
    }
}

impl SearchState for SuperqueensBoard {
    type Key = PlacementList;
    type Cost = u32;

    /// Emits one child per unused row in the next column, in ascending row
    /// order. Each child's step cost is the number of existing queens
    /// attacking the new cell.
    fn successors(&self) -> Vec<Successor<Self>> {
        let col = self.queens.len();
        if col >= self.n {
            return Vec::new();
        }
        let mut children = Vec::with_capacity(self.n - col);
        for row in 0..self.n {
            if self.queens.iter().any(|queen| queen.row == row) {
                continue;
            }
            let mut queens = self.queens.clone();
            queens.push(Placement::new(row, col));
            let child = Self { n: self.n, queens };
            children.push(Successor::new(child, self.attacks_on(row, col)));
        }
        children
    }

    /// True once every column holds a queen, regardless of conflicts.
    ///
    /// Callers wanting a conflict-free solution must also check that the
    /// goal node's accumulated cost is zero.
    fn is_goal(&self) -> bool {
        self.queens.len() == self.n
    }

    /// No heuristic guidance; search is uniform-cost for this problem.
    fn heuristic(&self) -> u32 {
        0
    }

    fn key(&self) -> Self::Key {
        self.queens.clone()
    }
}

impl fmt::Display for SuperqueensBoard {
    /// Renders the board as ` . ` / ` Q ` cells, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                let occupied = self
                    .queens
                    .iter()
                    .any(|queen| queen.row == row && queen.col == col);
                write!(f, "{}", if occupied { " Q " } else { " . " })?;
            }
            if row + 1 < self.n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchforge_engine::AstarEngine;

    /// Walks the successor chain placing queens at the given rows.
    fn place(root: &SuperqueensBoard, rows: &[usize]) -> (SuperqueensBoard, u32) {
        let mut board = root.clone();
        let mut cost = 0;
        for &row in rows {
            let children = board.successors();
            let child = children
                .into_iter()
                .find(|c| c.state.queens().last().map(|q| q.row) == Some(row))
                .expect("row should be available");
            cost += child.step_cost;
            board = child.state;
        }
        (board, cost)
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(matches!(
            SuperqueensBoard::new(0),
            Err(SearchForgeError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_empty_board_rendering() {
        let root = SuperqueensBoard::new(4).unwrap();
        assert_eq!(
            root.to_string(),
            " .  .  .  . \n .  .  .  . \n .  .  .  . \n .  .  .  . "
        );
    }

    #[test]
    fn test_rendering_marks_queens() {
        let root = SuperqueensBoard::new(2).unwrap();
        let (board, _) = place(&root, &[1]);
        assert_eq!(board.to_string(), " .  . \n Q  . ");
    }

    #[test]
    fn test_root_has_one_child_per_row() {
        let root = SuperqueensBoard::new(7).unwrap();
        let children = root.successors();
        assert_eq!(children.len(), 7);

        let rows: Vec<usize> = children
            .iter()
            .map(|c| c.state.queens()[0].row)
            .collect();
        assert_eq!(rows, (0..7).collect::<Vec<_>>());
        for child in &children {
            assert_eq!(child.state.queens()[0].col, 0);
        }
    }

    #[test]
    fn test_used_rows_are_skipped() {
        let root = SuperqueensBoard::new(4).unwrap();
        let (board, _) = place(&root, &[2]);
        let rows: Vec<usize> = board
            .successors()
            .iter()
            .map(|c| c.state.queens()[1].row)
            .collect();
        assert_eq!(rows, vec![0, 1, 3]);
    }

    #[test]
    fn test_complete_board_has_no_children() {
        let root = SuperqueensBoard::new(2).unwrap();
        let (board, _) = place(&root, &[0, 1]);
        assert!(board.is_goal());
        assert!(board.successors().is_empty());
    }

    #[test]
    fn test_diagonal_conflict_costs_one() {
        let root = SuperqueensBoard::new(4).unwrap();
        let (_, cost) = place(&root, &[0, 1]);
        assert_eq!(cost, 1);
    }

    #[test]
    fn test_knight_conflict_costs_one() {
        let root = SuperqueensBoard::new(4).unwrap();
        let (_, cost) = place(&root, &[0, 2]);
        assert_eq!(cost, 1);
    }

    #[test]
    fn test_distant_rows_do_not_conflict() {
        let root = SuperqueensBoard::new(4).unwrap();
        let (_, cost) = place(&root, &[0, 3]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn test_two_column_knight_offset() {
        // (0,0) attacks (1,2) two columns over; (3,1) attacks it as well.
        let root = SuperqueensBoard::new(4).unwrap();
        let (board, cost) = place(&root, &[0, 3]);
        assert_eq!(cost, 0);

        let children = board.successors();
        let row1 = children
            .iter()
            .find(|c| c.state.queens()[2].row == 1)
            .unwrap();
        assert_eq!(row1.step_cost, 2);
    }

    #[test]
    fn test_incremental_cost_matches_recount() {
        let root = SuperqueensBoard::new(5).unwrap();
        let (board, cost) = place(&root, &[0, 1, 2, 3, 4]);
        assert_eq!(cost, board.conflicts());
        assert!(board.is_goal());
    }

    #[test]
    fn test_key_is_the_placement_sequence() {
        let root = SuperqueensBoard::new(3).unwrap();
        assert!(root.key().is_empty());

        let (board, _) = place(&root, &[1]);
        assert_eq!(board.key().as_slice(), &[Placement::new(1, 0)]);
    }

    #[test]
    fn test_search_places_all_seven_queens() {
        let root = SuperqueensBoard::new(7).unwrap();
        let mut engine = AstarEngine::new();
        let path = engine.search(root).unwrap();

        assert_eq!(path.len(), 8);
        assert!(path.root().state().queens().is_empty());
        assert!(path.goal().is_goal());
        assert_eq!(path.goal().state().queens().len(), 7);

        // Incremental costs must agree with a whole-board recount.
        assert_eq!(path.total_cost(), path.goal().state().conflicts());
    }

    #[test]
    fn test_search_is_deterministic() {
        let run = || {
            let mut engine = AstarEngine::new();
            let path = engine.search(SuperqueensBoard::new(6).unwrap()).unwrap();
            path.goal().state().queens().to_vec()
        };
        assert_eq!(run(), run());
    }
}
