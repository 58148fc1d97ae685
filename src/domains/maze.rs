//! Grid-maze pathfinding: find a cheapest route between two cells, moving
//! through open cells only.
//!
//! Costs use a base-10 integer scale: 10 per cardinal step and 14 per
//! diagonal step (approximating √2 × 10) when diagonal movement is enabled.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SearchError},
    search::domain::{SearchDomain, Successor},
};

pub const CARDINAL_COST: u64 = 10;
pub const DIAGONAL_COST: u64 = 14;

/// Row/column coordinate of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular grid of open and blocked cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Maze {
    rows: usize,
    cols: usize,
    /// Row-major blocked flags.
    blocked: Vec<bool>,
}

impl Maze {
    /// A grid with every cell open.
    pub fn open(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            blocked: vec![false; rows * cols],
        }
    }

    /// Parses a grid from lines of `.` (open) and `#` (blocked).
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(
                SearchError::InvalidConfiguration("maze text is empty".to_string()).into(),
            );
        }

        let cols = lines[0].chars().count();
        let mut blocked = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(SearchError::InvalidConfiguration(format!(
                    "maze row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    cols
                ))
                .into());
            }
            for symbol in line.chars() {
                match symbol {
                    '.' => blocked.push(false),
                    '#' => blocked.push(true),
                    other => {
                        return Err(SearchError::InvalidConfiguration(format!(
                            "unexpected maze symbol {:?} in row {}",
                            other, row
                        ))
                        .into())
                    }
                }
            }
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            blocked,
        })
    }

    pub fn block(&mut self, cell: Cell) {
        let index = self.index(cell);
        self.blocked[index] = true;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked[self.index(cell)]
    }

    /// Row-major index of an in-bounds cell.
    pub fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }
}

/// Domain plug-in: route through a [`Maze`] to a goal cell. The start cell is
/// supplied to the engine as the initial state.
#[derive(Debug, Clone)]
pub struct MazeProblem {
    maze: Maze,
    goal: Cell,
    diagonals: bool,
}

impl MazeProblem {
    pub fn new(maze: Maze, goal: Cell) -> Self {
        Self {
            maze,
            goal,
            diagonals: false,
        }
    }

    /// Enables the four diagonal moves at [`DIAGONAL_COST`] per step.
    pub fn with_diagonals(mut self) -> Self {
        self.diagonals = true;
        self
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Manhattan distance to the goal, scaled to match the move-cost units.
    pub fn manhattan(&self, cell: Cell) -> u64 {
        let rows = cell.row.abs_diff(self.goal.row) as u64;
        let cols = cell.col.abs_diff(self.goal.col) as u64;
        (rows + cols) * CARDINAL_COST
    }

    fn check_endpoint(&self, name: &str, cell: Cell) -> Result<()> {
        if !self.maze.in_bounds(cell) {
            return Err(SearchError::InvalidConfiguration(format!(
                "{} cell ({}, {}) is outside the {}x{} maze",
                name, cell.row, cell.col, self.maze.rows, self.maze.cols
            ))
            .into());
        }
        if self.maze.is_blocked(cell) {
            return Err(SearchError::InvalidConfiguration(format!(
                "{} cell ({}, {}) is blocked",
                name, cell.row, cell.col
            ))
            .into());
        }
        Ok(())
    }
}

impl SearchDomain for MazeProblem {
    type State = Cell;
    type Key = usize;

    fn canonical_key(&self, state: &Cell) -> usize {
        self.maze.index(*state)
    }

    fn expand(&self, state: &Cell) -> Vec<Successor<Cell>> {
        const CARDINAL: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        const DIAGONAL: [(i64, i64); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

        let diagonal_count = if self.diagonals { DIAGONAL.len() } else { 0 };

        let mut successors = Vec::with_capacity(4 + diagonal_count);
        for &(delta_row, delta_col) in CARDINAL.iter().chain(DIAGONAL[..diagonal_count].iter()) {
            let row = state.row as i64 + delta_row;
            let col = state.col as i64 + delta_col;
            if row < 0 || col < 0 {
                continue;
            }
            let cell = Cell::new(row as usize, col as usize);
            if !self.maze.in_bounds(cell) || self.maze.is_blocked(cell) {
                continue;
            }
            let cost = if delta_row != 0 && delta_col != 0 {
                DIAGONAL_COST
            } else {
                CARDINAL_COST
            };
            successors.push(Successor::new(cell, cost));
        }
        successors
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }

    fn heuristic(&self, state: &Cell) -> u64 {
        self.manhattan(*state)
    }

    fn validate(&self, start: &Cell) -> Result<()> {
        self.check_endpoint("start", *start)?;
        self.check_endpoint("goal", self.goal)
    }
}
