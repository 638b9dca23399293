use super::Graph;
use crate::error::MazeParseError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// up, down, left, right
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rectangular 2D maze with 4-neighbor connectivity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
}

/// A maze read from text together with the endpoints marked in it.
#[derive(Debug, Clone)]
pub struct ParsedMaze {
    pub grid: Grid,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
}

impl Grid {
    /// Open grid of `rows` x `cols` cells.
    ///
    /// Panics if the cell count overflows `usize`; bounded sizes come from
    /// [`crate::GridConfig`].
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            walls: vec![false; rows * cols],
        }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, cell: &Cell) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    pub fn is_wall(&self, cell: &Cell) -> bool {
        self.index(cell).is_some_and(|idx| self.walls[idx])
    }

    /// Returns false when `cell` lies outside the grid.
    pub fn set_wall(&mut self, cell: &Cell, wall: bool) -> bool {
        match self.index(cell) {
            Some(idx) => {
                self.walls[idx] = wall;
                true
            }
            None => false,
        }
    }

    /// Flips a cell between wall and open floor, returning its new state.
    pub fn toggle_wall(&mut self, cell: &Cell) -> Option<bool> {
        let idx = self.index(cell)?;
        self.walls[idx] = !self.walls[idx];
        Some(self.walls[idx])
    }

    pub fn clear_walls(&mut self) {
        self.walls.iter_mut().for_each(|wall| *wall = false);
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| **wall).count()
    }

    /// Start one cell in from the top-left corner, goal one cell in from the
    /// bottom-right, clamped for very small grids.
    pub fn default_endpoints(&self) -> (Cell, Cell) {
        let inset = |extent: usize| if extent >= 3 { 1 } else { 0 };
        let start = Cell::new(inset(self.rows), inset(self.cols));
        let goal = Cell::new(
            self.rows.saturating_sub(1 + inset(self.rows)),
            self.cols.saturating_sub(1 + inset(self.cols)),
        );
        (start, goal)
    }

    /// Rebuilds the wall layout at random: every cell except the protected ones
    /// becomes a wall independently with probability `density_percent / 100`.
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        density_percent: f64,
        protected: &[Cell],
        rng: &mut R,
    ) -> usize {
        self.clear_walls();
        let probability = (density_percent / 100.0).clamp(0.0, 1.0);

        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                if protected.contains(&cell) {
                    continue;
                }
                if rng.random_bool(probability) {
                    self.set_wall(&cell, true);
                }
            }
        }

        self.wall_count()
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    /// Reads a maze drawn as text: `#` wall, `.` or space open floor,
    /// `S` start, `G` goal. Empty lines are ignored; a line of spaces is a
    /// row of open floor.
    pub fn parse(layout: &str) -> Result<ParsedMaze, MazeParseError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = lines.first() else {
            return Err(MazeParseError::Empty);
        };

        let cols = first.chars().count();
        let mut grid = Grid::new(lines.len(), cols);
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(MazeParseError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::new(row, col);
                match ch {
                    '#' => {
                        grid.set_wall(&cell, true);
                    }
                    '.' | ' ' => {}
                    'S' => {
                        if start.replace(cell).is_some() {
                            return Err(MazeParseError::DuplicateMarker('S'));
                        }
                    }
                    'G' => {
                        if goal.replace(cell).is_some() {
                            return Err(MazeParseError::DuplicateMarker('G'));
                        }
                    }
                    other => return Err(MazeParseError::UnexpectedChar { ch: other, row, col }),
                }
            }
        }

        Ok(ParsedMaze { grid, start, goal })
    }
}

impl Graph for Grid {
    type Node = Cell;

    fn neighbors(&self, cell: &Cell) -> Vec<Cell> {
        if self.index(cell).is_none() {
            return vec![];
        }

        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = cell.row.checked_add_signed(dr)?;
                let col = cell.col.checked_add_signed(dc)?;
                let neighbor = Cell::new(row, col);
                (self.index(&neighbor).is_some() && !self.is_wall(&neighbor)).then_some(neighbor)
            })
            .collect()
    }

    fn exists(&self, cell: &Cell) -> bool {
        self.index(cell).is_some()
    }

    fn is_passable(&self, cell: &Cell) -> bool {
        self.exists(cell) && !self.is_wall(cell)
    }

    fn node_count(&self) -> usize {
        self.rows * self.cols
    }
}
