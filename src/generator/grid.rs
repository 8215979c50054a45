/*
grid.rs

Copyright 2025 Tarot Maze contributors

This file is part of Tarot Maze.

Tarot Maze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Tarot Maze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Tarot Maze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Square grid of wall and path cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content of a grid cell.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
}

/// Cell coordinates. `x` is the column and `y` the row, both starting at 0.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Return the adjacent position in the given direction, or None if it would be negative.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Movement directions.
///
/// [`Direction::ALL`] gives the order in which neighbors are always visited. Both the maze
/// generator and the path finder depend on that order for reproducible results.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    /// The four directions, in neighbor enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Column and row offsets for the direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// Square matrix of [`Cell`] values, stored row by row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows and columns.
    size: usize,

    /// Cells, `size * size` entries, row-major.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid filled with walls.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Wall; size * size],
        }
    }

    /// Number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// Whether the position is strictly inside the border.
    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x > 0 && pos.x < self.size - 1 && pos.y > 0 && pos.y < self.size - 1
    }

    /// Return the cell at the given position, or None when outside the grid.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        if self.contains(pos) {
            Some(self.cells[pos.y * self.size + pos.x])
        } else {
            None
        }
    }

    /// Whether the position is inside the grid and is a path cell.
    pub fn is_path(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Path)
    }

    /// Whether the position is inside the grid and is a wall cell.
    pub fn is_wall(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Wall)
    }

    /// Set a cell. Positions outside the grid are ignored.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        if self.contains(pos) {
            self.cells[pos.y * self.size + pos.x] = cell;
        }
    }

    /// Return the in-grid neighbors of a position, in [`Direction::ALL`] order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| {
            pos.step(d).filter(|p| self.contains(*p)).map(|p| (d, p))
        })
    }

    /// Iterate over all the positions of path cells, row by row.
    pub fn path_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Path)
            .map(|(i, _)| Position::new(i % self.size, i / self.size))
    }
}
