//! The classic 3×3 sliding-tile puzzle: slide tiles into the blank until the
//! goal arrangement is reached.

use std::fmt;

use serde::Serialize;

use crate::{
    error::{Result, SearchError},
    search::domain::{SearchDomain, Successor},
};

/// Which estimator the informed strategies consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PuzzleHeuristic {
    /// Sum of tile distances to their goal positions. Admissible and
    /// consistent; the stronger of the two.
    Manhattan,
    /// Count of non-blank tiles out of place. Admissible, weaker.
    MisplacedTiles,
}

/// A 3×3 tile arrangement in row-major order; `0` is the blank.
///
/// Construction validates that the cells are a permutation of `0..=8`, so a
/// `Board` value is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Board([u8; 9]);

impl Board {
    /// The conventional goal arrangement: tiles in order, blank last.
    pub const SOLVED: Board = Board([1, 2, 3, 4, 5, 6, 7, 8, 0]);

    pub fn new(cells: [u8; 9]) -> Result<Self> {
        let mut seen = [false; 9];
        for &cell in &cells {
            if cell > 8 || seen[cell as usize] {
                return Err(SearchError::InvalidConfiguration(format!(
                    "board {:?} is not a permutation of 0..=8",
                    cells
                ))
                .into());
            }
            seen[cell as usize] = true;
        }
        Ok(Board(cells))
    }

    pub fn from_rows(rows: [[u8; 3]; 3]) -> Result<Self> {
        let mut cells = [0; 9];
        for (row_index, row) in rows.iter().enumerate() {
            cells[row_index * 3..row_index * 3 + 3].copy_from_slice(row);
        }
        Self::new(cells)
    }

    pub fn cells(&self) -> [u8; 9] {
        self.0
    }

    /// Whether `goal` is reachable from this arrangement.
    ///
    /// Sliding a tile never changes the inversion parity of the non-blank
    /// sequence, so the two arrangements are mutually reachable exactly when
    /// their parities agree. Informational: the search itself proves
    /// unreachability by exhaustion.
    pub fn solvable_from(&self, goal: &Board) -> bool {
        self.inversions() % 2 == goal.inversions() % 2
    }

    fn inversions(&self) -> u32 {
        let tiles: Vec<u8> = self.0.iter().copied().filter(|&cell| cell != 0).collect();
        let mut count = 0;
        for i in 0..tiles.len() {
            for j in i + 1..tiles.len() {
                if tiles[i] > tiles[j] {
                    count += 1;
                }
            }
        }
        count
    }

    fn blank_index(&self) -> usize {
        self.0.iter().position(|&cell| cell == 0).unwrap()
    }

    /// All boards one blank-slide away.
    fn neighbors(&self) -> Vec<Board> {
        let blank = self.blank_index();
        let (row, col) = ((blank / 3) as i8, (blank % 3) as i8);
        let mut out = Vec::with_capacity(4);
        for (delta_row, delta_col) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (new_row, new_col) = (row + delta_row, col + delta_col);
            if !(0..3).contains(&new_row) || !(0..3).contains(&new_col) {
                continue;
            }
            let mut cells = self.0;
            cells.swap(blank, (new_row * 3 + new_col) as usize);
            out.push(Board(cells));
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let cell = self.0[row * 3 + col];
                if cell == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", cell)?;
                }
                if col < 2 {
                    write!(f, " ")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Domain plug-in for the 8-puzzle.
#[derive(Debug, Clone)]
pub struct EightPuzzle {
    goal: Board,
    heuristic: PuzzleHeuristic,
    /// Goal position of each tile value, precomputed once.
    goal_positions: [(u8, u8); 9],
}

impl EightPuzzle {
    pub fn new(goal: Board) -> Self {
        Self::with_heuristic(goal, PuzzleHeuristic::Manhattan)
    }

    pub fn with_heuristic(goal: Board, heuristic: PuzzleHeuristic) -> Self {
        let mut goal_positions = [(0, 0); 9];
        for (index, &cell) in goal.0.iter().enumerate() {
            goal_positions[cell as usize] = ((index / 3) as u8, (index % 3) as u8);
        }
        Self {
            goal,
            heuristic,
            goal_positions,
        }
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Sum over non-blank tiles of row distance plus column distance to the
    /// tile's goal position.
    pub fn manhattan(&self, board: &Board) -> u64 {
        let mut distance = 0;
        for (index, &cell) in board.0.iter().enumerate() {
            if cell == 0 {
                continue;
            }
            let (row, col) = ((index / 3) as u8, (index % 3) as u8);
            let (goal_row, goal_col) = self.goal_positions[cell as usize];
            distance += u64::from(row.abs_diff(goal_row)) + u64::from(col.abs_diff(goal_col));
        }
        distance
    }

    /// Count of non-blank tiles whose cell differs from the goal arrangement.
    pub fn misplaced_tiles(&self, board: &Board) -> u64 {
        board
            .0
            .iter()
            .zip(self.goal.0.iter())
            .filter(|(&cell, &goal_cell)| cell != 0 && cell != goal_cell)
            .count() as u64
    }

    /// A reachable instance produced by walking the blank `steps` times from
    /// the goal arrangement.
    pub fn scramble<R: rand::Rng>(&self, rng: &mut R, steps: usize) -> Board {
        let mut board = self.goal;
        for _ in 0..steps {
            let neighbors = board.neighbors();
            board = neighbors[rng.gen_range(0..neighbors.len())];
        }
        board
    }
}

impl SearchDomain for EightPuzzle {
    type State = Board;
    type Key = [u8; 9];

    fn canonical_key(&self, state: &Board) -> [u8; 9] {
        state.0
    }

    fn expand(&self, state: &Board) -> Vec<Successor<Board>> {
        // Direction names describe the tile being slid, which moves opposite
        // to the blank.
        const MOVES: [(i8, i8, &str); 4] = [
            (-1, 0, "down"),
            (1, 0, "up"),
            (0, -1, "right"),
            (0, 1, "left"),
        ];

        let blank = state.blank_index();
        let (row, col) = ((blank / 3) as i8, (blank % 3) as i8);
        let mut successors = Vec::with_capacity(4);
        for (delta_row, delta_col, direction) in MOVES {
            let (new_row, new_col) = (row + delta_row, col + delta_col);
            if !(0..3).contains(&new_row) || !(0..3).contains(&new_col) {
                continue;
            }
            let swap = (new_row * 3 + new_col) as usize;
            let tile = state.0[swap];
            let mut cells = state.0;
            cells.swap(blank, swap);
            successors.push(Successor::with_action(
                Board(cells),
                1,
                format!("slide {} {}", tile, direction),
            ));
        }
        successors
    }

    fn is_goal(&self, state: &Board) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &Board) -> u64 {
        match self.heuristic {
            PuzzleHeuristic::Manhattan => self.manhattan(state),
            PuzzleHeuristic::MisplacedTiles => self.misplaced_tiles(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::search::engine::SearchEngine;
    use crate::search::report::{SearchReport, Termination};
    use crate::search::strategy::{SearchOptions, Strategy};

    fn one_move_start() -> Board {
        Board::from_rows([[1, 2, 3], [4, 5, 6], [7, 0, 8]]).unwrap()
    }

    fn three_move_start() -> Board {
        Board::from_rows([[1, 2, 3], [4, 0, 5], [7, 8, 6]]).unwrap()
    }

    fn unsolvable_start() -> Board {
        Board::from_rows([[1, 6, 4], [3, 5, 0], [8, 7, 2]]).unwrap()
    }

    /// Every consecutive pair in the path must be connected by `expand`.
    fn assert_replayable(domain: &EightPuzzle, report: &SearchReport<Board>) {
        for (step, next) in report.path.iter().zip(report.path.iter().skip(1)) {
            let successors = domain.expand(&step.state);
            assert!(
                successors.iter().any(|s| s.state == next.state),
                "step {} -> {} is not a legal move",
                step.state,
                next.state
            );
        }
        assert!(domain.is_goal(&report.path.last().unwrap().state));
    }

    #[test]
    fn rejects_non_permutation_boards() {
        assert!(Board::new([1, 1, 2, 3, 4, 5, 6, 7, 8]).is_err());
        assert!(Board::new([0, 1, 2, 3, 4, 5, 6, 7, 9]).is_err());
        assert!(Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]).is_ok());
    }

    #[test]
    fn bfs_solves_the_one_move_instance_in_one_move() {
        let _ = tracing_subscriber::fmt::try_init();

        let domain = EightPuzzle::new(Board::SOLVED);
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
        let report = engine.run(&domain, one_move_start()).unwrap();

        assert!(report.is_goal());
        assert_eq!(report.moves(), 1);
        assert_eq!(report.path[1].action.as_deref(), Some("slide 8 left"));
        assert_replayable(&domain, &report);
    }

    #[test]
    fn bfs_and_astar_agree_on_the_three_move_instance() {
        let domain = EightPuzzle::new(Board::SOLVED);

        let bfs = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst))
            .run(&domain, three_move_start())
            .unwrap();
        let astar = SearchEngine::new(SearchOptions::new(Strategy::AStar))
            .run(&domain, three_move_start())
            .unwrap();

        assert_eq!(bfs.moves(), 3);
        assert_eq!(astar.solution_cost(), Some(3));
        assert_replayable(&domain, &bfs);
        assert_replayable(&domain, &astar);
    }

    #[test]
    fn best_first_reaches_the_goal_with_either_heuristic() {
        for heuristic in [PuzzleHeuristic::Manhattan, PuzzleHeuristic::MisplacedTiles] {
            let domain = EightPuzzle::with_heuristic(Board::SOLVED, heuristic);
            let engine = SearchEngine::new(SearchOptions::new(Strategy::BestFirst));
            let report = engine.run(&domain, three_move_start()).unwrap();
            assert!(report.is_goal(), "BestFS failed with {:?}", heuristic);
            assert_replayable(&domain, &report);
        }
    }

    #[test]
    fn parity_separates_solvable_from_unsolvable_instances() {
        assert!(one_move_start().solvable_from(&Board::SOLVED));
        assert!(three_move_start().solvable_from(&Board::SOLVED));
        assert!(!unsolvable_start().solvable_from(&Board::SOLVED));
    }

    #[test]
    fn bfs_exhausts_the_unsolvable_instance() {
        let domain = EightPuzzle::new(Board::SOLVED);
        let engine = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst));
        let report = engine.run(&domain, unsolvable_start()).unwrap();

        // The reachable component's diameter is 31, inside the default cap,
        // so BFS drains the whole component rather than hitting the limit.
        assert_eq!(report.termination, Termination::Exhausted);
        assert!(report.path.is_empty());
        assert_eq!(report.stats.nodes_explored, 181_440);
    }

    #[test]
    fn dfs_hits_the_depth_limit_on_the_unsolvable_instance() {
        let domain = EightPuzzle::new(Board::SOLVED);
        let engine = SearchEngine::new(SearchOptions::new(Strategy::DepthFirst));
        let report = engine.run(&domain, unsolvable_start()).unwrap();

        assert!(!report.is_goal());
        assert_eq!(report.termination, Termination::DepthLimited);
    }

    #[test]
    fn manhattan_and_misplaced_values_on_known_boards() {
        let domain = EightPuzzle::new(Board::SOLVED);

        assert_eq!(domain.manhattan(&Board::SOLVED), 0);
        assert_eq!(domain.misplaced_tiles(&Board::SOLVED), 0);

        assert_eq!(domain.manhattan(&one_move_start()), 1);
        assert_eq!(domain.misplaced_tiles(&one_move_start()), 1);

        // Manhattan dominates misplaced tiles everywhere.
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let board = domain.scramble(&mut rng, 25);
            assert!(domain.manhattan(&board) >= domain.misplaced_tiles(&board));
        }
    }

    #[test]
    fn scrambles_stay_reachable() {
        let domain = EightPuzzle::new(Board::SOLVED);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let board = domain.scramble(&mut rng, 40);
        assert!(board.solvable_from(&Board::SOLVED));

        let report = SearchEngine::new(SearchOptions::new(Strategy::AStar))
            .run(&domain, board)
            .unwrap();
        assert!(report.is_goal());
        assert_replayable(&domain, &report);
    }

    #[test]
    fn board_renders_with_a_dot_for_the_blank() {
        assert_eq!(one_move_start().to_string(), "1 2 3\n4 5 6\n7 . 8");
    }

    #[cfg(test)]
    mod prop_tests {
        use proptest::prelude::*;
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        use super::*;
        // The proptest prelude has its own `Strategy`; ours wins explicitly.
        use crate::search::strategy::Strategy;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            /// With unit move costs, A*'s optimal cost equals BFS's minimal
            /// move count on the same instance.
            #[test]
            fn astar_cost_matches_bfs_moves(seed in 0u64..1000, steps in 0usize..10) {
                let domain = EightPuzzle::new(Board::SOLVED);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let start = domain.scramble(&mut rng, steps);

                let bfs = SearchEngine::new(SearchOptions::new(Strategy::BreadthFirst))
                    .run(&domain, start)
                    .unwrap();
                let astar = SearchEngine::new(SearchOptions::new(Strategy::AStar))
                    .run(&domain, start)
                    .unwrap();

                prop_assert!(bfs.is_goal());
                prop_assert!(astar.is_goal());
                prop_assert_eq!(astar.solution_cost().unwrap(), bfs.moves() as u64);
            }

            /// Distinct boards always encode to distinct canonical keys.
            #[test]
            fn canonical_keys_are_injective(seed_a in 0u64..500, seed_b in 0u64..500) {
                let domain = EightPuzzle::new(Board::SOLVED);
                let mut rng_a = ChaCha8Rng::seed_from_u64(seed_a);
                let mut rng_b = ChaCha8Rng::seed_from_u64(seed_b);
                let a = domain.scramble(&mut rng_a, 30);
                let b = domain.scramble(&mut rng_b, 31);

                prop_assert_eq!(
                    a == b,
                    domain.canonical_key(&a) == domain.canonical_key(&b)
                );
            }
        }
    }
}
