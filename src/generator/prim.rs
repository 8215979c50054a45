/*
prim.rs

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

//! Generate a random perfect maze with the randomized Prim's algorithm.

use log::{debug, warn};
use rand::Rng;

use super::grid::{Cell, Direction, Grid, Position};
use super::maze::{MIN_SIZE, Maze, MazeError, START};

/// Wall cell waiting to be carved, with the direction it was reached from.
#[derive(Debug, Copy, Clone)]
struct FrontierEntry {
    /// The wall cell.
    pos: Position,

    /// Direction from the path cell that added the entry to [`FrontierEntry::pos`].
    direction: Direction,
}

/// [`MazeGenerator`] object.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    /// Number of rows and columns.
    size: usize,

    /// Number of markers to place.
    marker_count: usize,
}

impl MazeGenerator {
    /// Create the object.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidConfiguration`] if `size` is smaller than [`MIN_SIZE`].
    pub fn new(size: usize, marker_count: usize) -> Result<Self, MazeError> {
        if size < MIN_SIZE {
            return Err(MazeError::InvalidConfiguration(format!(
                "size {size} is smaller than {MIN_SIZE}"
            )));
        }
        Ok(Self { size, marker_count })
    }

    /// Generate and return a random maze.
    ///
    /// All random draws come from `rng`, so a seeded generator always gives the same maze.
    ///
    /// # Errors
    ///
    /// The method returns an error if the maze does not have enough path cells for the
    /// requested number of markers.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Maze, MazeError> {
        let mut grid: Grid = self.carve(rng);
        let exit: Position = self.place_exit(&mut grid);

        // Start and exit cannot hold a marker
        let capacity: usize = grid.path_cells().count().saturating_sub(2);
        if self.marker_count > capacity {
            return Err(MazeError::InvalidConfiguration(format!(
                "{} markers requested but a {}x{} maze only has room for {capacity}",
                self.marker_count, self.size, self.size
            )));
        }
        let markers: Vec<Position> = self.place_markers(&grid, exit, rng);

        Ok(Maze {
            grid,
            start: START,
            exit,
            markers,
        })
    }

    /// Build the grid by carving passages from the start cell.
    fn carve<R: Rng>(&self, rng: &mut R) -> Grid {
        let mut grid: Grid = Grid::new(self.size);
        let mut frontier: Vec<FrontierEntry> = Vec::with_capacity(self.size * self.size);
        let mut iteration: usize = 0;

        grid.set(START, Cell::Path);
        Self::push_frontier(&grid, START, &mut frontier);

        while !frontier.is_empty() {
            iteration += 1;
            // Ordered removal keeps the remaining entries in insertion order
            let entry: FrontierEntry = frontier.remove(rng.random_range(0..frontier.len()));

            let Some(opposite) = entry.pos.step(entry.direction) else {
                continue;
            };
            if !grid.is_interior(opposite) || !grid.is_wall(opposite) {
                continue;
            }
            debug!(
                "Carving {} and {} (iteration {iteration}, frontier {})",
                entry.pos,
                opposite,
                frontier.len()
            );
            grid.set(entry.pos, Cell::Path);
            grid.set(opposite, Cell::Path);
            Self::push_frontier(&grid, opposite, &mut frontier);
        }
        debug!("Maze {}x{} carved in {iteration} iterations", self.size, self.size);
        grid
    }

    /// Add the interior wall neighbors of a path cell to the frontier.
    fn push_frontier(grid: &Grid, from: Position, frontier: &mut Vec<FrontierEntry>) {
        for (direction, pos) in grid.neighbors(from) {
            if grid.is_interior(pos) && grid.is_wall(pos) {
                frontier.push(FrontierEntry { pos, direction });
            }
        }
    }

    /// Select the exit: the path cell closest to the bottom-right corner, scanning rows from
    /// the bottom.
    fn place_exit(&self, grid: &mut Grid) -> Position {
        for y in (1..self.size - 1).rev() {
            for x in (1..self.size - 1).rev() {
                let pos: Position = Position::new(x, y);
                if pos != START && grid.is_path(pos) {
                    debug!("Exit at {pos}");
                    return pos;
                }
            }
        }

        // Carving always opens more than the start cell, so this is not expected
        let pos: Position = Position::new(self.size - 2, self.size - 2);
        warn!("No path cell found for the exit, forcing {pos}");
        grid.set(pos, Cell::Path);
        pos
    }

    /// Randomly place the markers on distinct path cells, away from the start and the exit.
    ///
    /// The caller must verify that the grid has enough path cells.
    fn place_markers<R: Rng>(&self, grid: &Grid, exit: Position, rng: &mut R) -> Vec<Position> {
        let mut markers: Vec<Position> = Vec::with_capacity(self.marker_count);

        while markers.len() < self.marker_count {
            let pos: Position = Position::new(
                rng.random_range(1..self.size - 1),
                rng.random_range(1..self.size - 1),
            );
            if grid.is_path(pos) && pos != START && pos != exit && !markers.contains(&pos) {
                debug!("Marker {} at {pos}", markers.len() + 1);
                markers.push(pos);
            }
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::path_finder::PathFinder;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::{HashSet, VecDeque};

    /// Random source that always draws zero, so every range sample is its lower bound.
    struct ZeroRng;

    impl rand::RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    fn reachable_from_start(maze: &Maze) -> HashSet<Position> {
        let mut seen: HashSet<Position> = HashSet::from([maze.start]);
        let mut queue: VecDeque<Position> = VecDeque::from([maze.start]);
        while let Some(p) = queue.pop_front() {
            for (_, n) in maze.grid.neighbors(p) {
                if maze.grid.is_path(n) && seen.insert(n) {
                    queue.push_back(n);
                }
            }
        }
        seen
    }

    fn edge_count(grid: &Grid) -> usize {
        grid.path_cells()
            .map(|p| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter_map(|d| p.step(d))
                    .filter(|n| grid.is_path(*n))
                    .count()
            })
            .sum()
    }

    #[test]
    fn rejects_small_sizes() {
        assert!(matches!(
            MazeGenerator::new(4, 0),
            Err(MazeError::InvalidConfiguration(_))
        ));
        assert!(MazeGenerator::new(5, 0).is_ok());
    }

    #[test]
    fn rejects_too_many_markers() {
        // A 5x5 maze always has 7 path cells
        let mut rng = StdRng::seed_from_u64(1);
        let generator = MazeGenerator::new(5, 6).unwrap();
        assert!(matches!(
            generator.generate(&mut rng),
            Err(MazeError::InvalidConfiguration(_))
        ));
        let maze = MazeGenerator::new(5, 5).unwrap().generate(&mut rng).unwrap();
        assert_eq!(maze.markers.len(), 5);
    }

    #[test]
    fn mazes_are_spanning_trees() {
        for seed in 0..40 {
            for size in [5, 8, 9, 12, 16] {
                let mut rng = StdRng::seed_from_u64(seed);
                let maze = MazeGenerator::new(size, 0).unwrap().generate(&mut rng).unwrap();
                let paths: HashSet<Position> = maze.grid.path_cells().collect();

                assert_eq!(reachable_from_start(&maze), paths, "size {size} seed {seed}");
                assert_eq!(edge_count(&maze.grid), paths.len() - 1, "size {size} seed {seed}");
            }
        }
    }

    #[test]
    fn border_stays_walled() {
        let mut rng = StdRng::seed_from_u64(7);
        let maze = MazeGenerator::new(12, 0).unwrap().generate(&mut rng).unwrap();
        for i in 0..12 {
            for pos in [
                Position::new(i, 0),
                Position::new(i, 11),
                Position::new(0, i),
                Position::new(11, i),
            ] {
                assert!(maze.grid.is_wall(pos), "{pos} should be a wall");
            }
        }
    }

    #[test]
    fn exit_and_markers_are_valid() {
        for seed in 0..40 {
            let mut rng = StdRng::seed_from_u64(seed);
            let maze = MazeGenerator::new(10, 4).unwrap().generate(&mut rng).unwrap();

            assert_eq!(maze.start, START);
            assert!(maze.grid.is_path(maze.exit));
            assert_ne!(maze.exit, maze.start);
            assert_eq!(maze.markers.len(), 4);

            let distinct: HashSet<Position> = maze.markers.iter().copied().collect();
            assert_eq!(distinct.len(), 4);
            for m in &maze.markers {
                assert!(maze.grid.is_path(*m));
                assert_ne!(*m, maze.start);
                assert_ne!(*m, maze.exit);
            }
        }
    }

    #[test]
    fn same_seed_gives_same_maze() {
        let generator = MazeGenerator::new(14, 6).unwrap();
        let a = generator.generate(&mut StdRng::seed_from_u64(99)).unwrap();
        let b = generator.generate(&mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn constant_source_gives_known_layout() {
        let maze = MazeGenerator::new(8, 0).unwrap().generate(&mut ZeroRng).unwrap();
        let expected = [
            "########", //
            "#.....##", //
            "#.#.#.##", //
            "#.#.#.##", //
            "#.#.#.##", //
            "#.#.#.##", //
            "########", //
            "########", //
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let cell = if c == '#' { Cell::Wall } else { Cell::Path };
                assert_eq!(maze.grid.get(Position::new(x, y)), Some(cell), "at ({x}, {y})");
            }
        }
        assert_eq!(maze.exit, Position::new(5, 5));
        assert!(maze.markers.is_empty());

        let steps = [(2, 1), (3, 1), (4, 1), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5)];
        let route: Vec<Position> = steps
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        assert_eq!(PathFinder::new(&maze).shortest_path(START).unwrap(), route);
        assert_eq!(PathFinder::new(&maze).distance(START).unwrap(), Some(8));
    }
}
