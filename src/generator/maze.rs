/*
maze.rs

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

//! Generated maze: the grid plus the start, exit, and marker positions.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

use super::grid::{Direction, Grid, Position};

/// Start position of every maze.
pub const START: Position = Position::new(1, 1);

/// Smallest grid size that gives a usable maze.
pub const MIN_SIZE: usize = 5;

/// Type of errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MazeError {
    /// The grid size or the marker count cannot give a valid maze.
    InvalidConfiguration(String),

    /// The position is outside the grid or is a wall.
    InvalidPosition(Position),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MazeError::InvalidConfiguration(msg) => write!(f, "invalid maze configuration: {msg}"),
            MazeError::InvalidPosition(pos) => write!(f, "invalid position {pos}"),
        }
    }
}

impl Error for MazeError {}

/// Maze object.
///
/// A maze is built once by [`crate::generator::prim::MazeGenerator::generate`] and is never
/// modified afterward. The player position and the collected markers are tracked by
/// [`crate::game::Game`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Maze {
    /// Wall and path cells.
    pub grid: Grid,

    /// Where the player starts. Always [`START`].
    pub start: Position,

    /// Cell to reach to complete the level.
    pub exit: Position,

    /// Collectible markers, in placement order.
    pub markers: Vec<Position>,
}

impl Maze {
    /// Number of rows (and columns) of the maze.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Whether a marker sits at the given position.
    pub fn is_marker(&self, pos: Position) -> bool {
        self.markers.contains(&pos)
    }

    /// Whether the path cells form a spanning tree reachable from the start: every path cell
    /// can be reached, and the number of passages between adjacent path cells is the number of
    /// path cells minus one (no loop).
    pub fn is_perfect(&self) -> bool {
        let size: usize = self.grid.size();
        let num_paths: usize = self.grid.path_cells().count();
        if !self.grid.is_path(self.start) {
            return false;
        }

        let mut visited: Vec<bool> = vec![false; size * size];
        let mut queue: VecDeque<Position> = VecDeque::from([self.start]);
        let mut reached: usize = 1;
        visited[self.start.y * size + self.start.x] = true;
        while let Some(p) = queue.pop_front() {
            for (_, n) in self.grid.neighbors(p) {
                if self.grid.is_path(n) && !visited[n.y * size + n.x] {
                    visited[n.y * size + n.x] = true;
                    reached += 1;
                    queue.push_back(n);
                }
            }
        }

        // Count each passage once, from its left or top cell
        let passages: usize = self
            .grid
            .path_cells()
            .flat_map(|p| [p.step(Direction::Right), p.step(Direction::Down)])
            .flatten()
            .filter(|n| self.grid.is_path(*n))
            .count();

        reached == num_paths && passages + 1 == num_paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::Cell;

    fn maze_with_paths(paths: &[(usize, usize)]) -> Maze {
        let mut grid = Grid::new(5);
        for (x, y) in paths {
            grid.set(Position::new(*x, *y), Cell::Path);
        }
        Maze {
            grid,
            start: START,
            exit: Position::new(3, 3),
            markers: vec![Position::new(3, 1)],
        }
    }

    #[test]
    fn tree_is_perfect() {
        let maze = maze_with_paths(&[(1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]);
        assert!(maze.is_perfect());
        assert!(maze.is_marker(Position::new(3, 1)));
        assert!(!maze.is_marker(Position::new(2, 1)));
    }

    #[test]
    fn loop_is_not_perfect() {
        let maze = maze_with_paths(&[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert!(!maze.is_perfect());
    }

    #[test]
    fn disconnected_is_not_perfect() {
        let maze = maze_with_paths(&[(1, 1), (2, 1), (3, 3)]);
        assert!(!maze.is_perfect());
    }

    #[test]
    fn errors_display() {
        assert_eq!(
            MazeError::InvalidPosition(Position::new(0, 0)).to_string(),
            "invalid position (0, 0)"
        );
        assert_eq!(
            MazeError::InvalidConfiguration("size 4 is smaller than 5".to_string()).to_string(),
            "invalid maze configuration: size 4 is smaller than 5"
        );
    }
}
