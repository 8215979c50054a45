/*
path_finder.rs

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

//! Shortest path to the exit, for the hint feature.

use log::debug;
use std::collections::VecDeque;

use super::grid::{Grid, Position};
use super::maze::{Maze, MazeError};

/// [`PathFinder`] object. It only reads the maze.
pub struct PathFinder<'a> {
    maze: &'a Maze,
}

impl<'a> PathFinder<'a> {
    /// Create the object.
    pub fn new(maze: &'a Maze) -> Self {
        Self { maze }
    }

    /// Return the shortest path from `from` to the exit.
    ///
    /// The returned list starts with the cell next to `from` and ends with the exit. It is empty
    /// when `from` is the exit or when the exit cannot be reached.
    /// Neighbors are explored right, left, down, then up, so the result is always the same for
    /// the same maze and position.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidPosition`] if `from` is outside the grid or is a wall.
    pub fn shortest_path(&self, from: Position) -> Result<Vec<Position>, MazeError> {
        let grid: &Grid = &self.maze.grid;
        if !grid.is_path(from) {
            return Err(MazeError::InvalidPosition(from));
        }

        let size: usize = grid.size();
        let index = |p: Position| p.y * size + p.x;

        // Predecessor of each reached cell. The starting cell is its own predecessor.
        let mut came_from: Vec<Option<Position>> = vec![None; size * size];
        let mut queue: VecDeque<Position> = VecDeque::new();
        came_from[index(from)] = Some(from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            if current == self.maze.exit {
                let path: Vec<Position> = Self::walk_back(&came_from, from, current, index);
                debug!("Path from {from} to the exit: {} steps", path.len());
                return Ok(path);
            }
            for (_, next) in grid.neighbors(current) {
                if grid.is_path(next) && came_from[index(next)].is_none() {
                    came_from[index(next)] = Some(current);
                    queue.push_back(next);
                }
            }
        }
        debug!("No path from {from} to the exit");
        Ok(Vec::new())
    }

    /// Return the number of steps from `from` to the exit, or None if the exit is unreachable.
    pub fn distance(&self, from: Position) -> Result<Option<usize>, MazeError> {
        let path: Vec<Position> = self.shortest_path(from)?;
        if path.is_empty() && from != self.maze.exit {
            Ok(None)
        } else {
            Ok(Some(path.len()))
        }
    }

    /// Rebuild the path by following the predecessors from the end back to the start.
    fn walk_back(
        came_from: &[Option<Position>],
        from: Position,
        to: Position,
        index: impl Fn(Position) -> usize,
    ) -> Vec<Position> {
        let mut path: Vec<Position> = Vec::new();
        let mut current: Position = to;
        while current != from {
            path.push(current);
            match came_from[index(current)] {
                Some(p) => current = p,
                None => break,
            }
        }
        path.reverse();
        path
    }
}
