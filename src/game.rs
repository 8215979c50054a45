/*
game.rs

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

//! Manage the status of a game in progress.

use log::{debug, info};
use rand::Rng;
use std::time::Duration;

use crate::generator::grid::{Direction, Position};
use crate::generator::levels::{self, LevelConfig};
use crate::generator::maze::{Maze, MazeError};
use crate::generator::path_finder::PathFinder;

/// Status of the level in progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    /// The player is looking for the exit.
    Playing,

    /// The player reached the exit.
    Completed { all_markers: bool },

    /// The countdown ended before the player reached the exit.
    TimeUp,
}

/// Result of a move request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The level is not being played, or a wall is in the way.
    Blocked,

    /// The player moved. `marker` is true when a marker was collected on the new cell.
    Moved { marker: bool },

    /// The player moved onto the exit.
    ExitReached { all_markers: bool },
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Index of the current level in [`levels::LEVELS`].
    level_index: usize,

    /// Maze of the current level. Replaced on every level load.
    maze: Maze,

    /// Player position.
    player: Position,

    /// Collected status of each marker, in the order of [`Maze::markers`].
    collected: Vec<bool>,

    /// Number of successful moves.
    moves: usize,

    /// Remaining time in seconds.
    time_left: u32,

    status: GameStatus,
}

impl Game {
    /// Create a [`Game`] object and load the given level.
    ///
    /// # Errors
    ///
    /// Return [`MazeError::InvalidConfiguration`] if the level does not exist or if its maze
    /// cannot be generated.
    pub fn new<R: Rng>(level_index: usize, rng: &mut R) -> Result<Self, MazeError> {
        let level: &LevelConfig = Self::level_config(level_index)?;
        let maze: Maze = level.generate(rng)?;
        Ok(Self::from_maze(level_index, maze))
    }

    /// Create a [`Game`] object for the given level with an already generated maze.
    fn from_maze(level_index: usize, maze: Maze) -> Self {
        let level: &LevelConfig = &levels::LEVELS[level_index];
        Self {
            level_index,
            player: maze.start,
            collected: vec![false; maze.markers.len()],
            maze,
            moves: 0,
            time_left: level.time_budget,
            status: GameStatus::Playing,
        }
    }

    fn level_config(level_index: usize) -> Result<&'static LevelConfig, MazeError> {
        levels::get(level_index).ok_or_else(|| {
            MazeError::InvalidConfiguration(format!("there is no level {}", level_index + 1))
        })
    }

    /// Discard the current maze and start the given level with a fresh one.
    pub fn load_level<R: Rng>(&mut self, level_index: usize, rng: &mut R) -> Result<(), MazeError> {
        let level: &LevelConfig = Self::level_config(level_index)?;
        let maze: Maze = level.generate(rng)?;
        info!(
            "Loading level {} ({}, {}x{})",
            level.id, level.difficulty, level.size, level.size
        );
        *self = Self::from_maze(level_index, maze);
        Ok(())
    }

    /// Start the current level again, with a new maze.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) -> Result<(), MazeError> {
        self.load_level(self.level_index, rng)
    }

    /// Go to the next level. After the last level, the game starts over from the first one.
    ///
    /// Return whether the game started over.
    pub fn next_level<R: Rng>(&mut self, rng: &mut R) -> Result<bool, MazeError> {
        let next: usize = self.level_index + 1;
        if next < levels::LEVELS.len() {
            self.load_level(next, rng)?;
            Ok(false)
        } else {
            self.load_level(0, rng)?;
            Ok(true)
        }
    }

    /// Whether the current level is the last one.
    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 == levels::LEVELS.len()
    }

    /// Move the player one cell in the given direction.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        if self.status != GameStatus::Playing {
            return MoveOutcome::Blocked;
        }
        let Some(target) = self.player.step(direction) else {
            return MoveOutcome::Blocked;
        };
        if !self.maze.grid.is_path(target) {
            debug!("Move {direction:?} from {} blocked", self.player);
            return MoveOutcome::Blocked;
        }

        self.player = target;
        self.moves += 1;

        let mut marker: bool = false;
        if let Some(i) = self.maze.markers.iter().position(|m| *m == target)
            && !self.collected[i]
        {
            self.collected[i] = true;
            marker = true;
            debug!(
                "Marker collected at {target} ({}/{})",
                self.collected_count(),
                self.collected.len()
            );
        }

        if target == self.maze.exit {
            let all_markers: bool = self.all_markers_collected();
            self.status = GameStatus::Completed { all_markers };
            info!(
                "Level {} completed in {} moves and {}s",
                self.level().id,
                self.moves,
                self.elapsed().as_secs()
            );
            return MoveOutcome::ExitReached { all_markers };
        }
        MoveOutcome::Moved { marker }
    }

    /// Count down one second. Return the status after the tick.
    pub fn tick(&mut self) -> GameStatus {
        if self.status == GameStatus::Playing {
            self.time_left = self.time_left.saturating_sub(1);
            if self.time_left == 0 {
                info!("Time is up for level {}", self.level().id);
                self.status = GameStatus::TimeUp;
            }
        }
        self.status
    }

    /// Return the shortest path from the player to the exit, or an empty list when the level is
    /// over.
    pub fn hint(&self) -> Result<Vec<Position>, MazeError> {
        if self.status != GameStatus::Playing {
            return Ok(Vec::new());
        }
        PathFinder::new(&self.maze).shortest_path(self.player)
    }

    /// Return the time spent on the level.
    pub fn elapsed(&self) -> Duration {
        Duration::from_secs(u64::from(self.level().time_budget - self.time_left))
    }

    pub fn level(&self) -> &'static LevelConfig {
        &levels::LEVELS[self.level_index]
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the marker at the given position has been collected.
    pub fn is_collected(&self, pos: Position) -> bool {
        self.maze
            .markers
            .iter()
            .position(|m| *m == pos)
            .is_some_and(|i| self.collected[i])
    }

    /// Number of collected markers.
    pub fn collected_count(&self) -> usize {
        self.collected.iter().filter(|c| **c).count()
    }

    pub fn all_markers_collected(&self) -> bool {
        self.collected.iter().all(|c| *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::grid::{Cell, Grid};
    use crate::generator::maze::START;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Build a first level game (8x8) from a picture: `#` wall, `*` marker, `E` exit.
    fn game_from_rows(rows: &[&str]) -> Game {
        let mut grid = Grid::new(8);
        let mut markers = Vec::new();
        let mut exit = START;
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                let pos = Position::new(x, y);
                if c != '#' {
                    grid.set(pos, Cell::Path);
                }
                match c {
                    '*' => markers.push(pos),
                    'E' => exit = pos,
                    _ => (),
                }
            }
        }
        Game::from_maze(
            0,
            Maze {
                grid,
                start: START,
                exit,
                markers,
            },
        )
    }

    /// A single corridor with both markers on the way to the exit.
    fn test_game() -> Game {
        game_from_rows(&[
            "########", //
            "#..*...#", //
            "######.#", //
            "#......#", //
            "#.######", //
            "#.*...E#", //
            "########", //
            "########", //
        ])
    }

    fn walk(game: &mut Game, moves: &str) -> MoveOutcome {
        let mut outcome = MoveOutcome::Blocked;
        for c in moves.chars() {
            let d = match c {
                'r' => Direction::Right,
                'l' => Direction::Left,
                'd' => Direction::Down,
                'u' => Direction::Up,
                _ => panic!("bad move {c}"),
            };
            outcome = game.move_player(d);
        }
        outcome
    }

    #[test]
    fn new_game_starts_at_the_start() {
        let mut rng = StdRng::seed_from_u64(8);
        let game = Game::new(2, &mut rng).unwrap();
        assert_eq!(game.level().id, 3);
        assert_eq!(game.player(), START);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.time_left(), 150);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.collected_count(), 0);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let mut rng = StdRng::seed_from_u64(8);
        assert!(matches!(
            Game::new(levels::LEVELS.len(), &mut rng),
            Err(MazeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn walls_block_without_counting() {
        let mut game = test_game();
        assert_eq!(game.move_player(Direction::Up), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Left), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Direction::Down), MoveOutcome::Blocked);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.player(), START);
    }

    #[test]
    fn markers_are_collected_once() {
        let mut game = test_game();
        assert_eq!(
            game.move_player(Direction::Right),
            MoveOutcome::Moved { marker: false }
        );
        assert_eq!(
            game.move_player(Direction::Right),
            MoveOutcome::Moved { marker: true }
        );
        assert!(game.is_collected(Position::new(3, 1)));
        assert_eq!(game.collected_count(), 1);

        walk(&mut game, "lr");
        assert_eq!(game.collected_count(), 1);
        assert_eq!(game.moves(), 4);
    }

    #[test]
    fn exit_completes_the_level() {
        let mut game = test_game();
        let outcome = walk(&mut game, "rrrrrddlllllddrrrrr");
        assert_eq!(outcome, MoveOutcome::ExitReached { all_markers: true });
        assert_eq!(game.status(), GameStatus::Completed { all_markers: true });
        assert_eq!(game.moves(), 19);
        assert_eq!(game.collected_count(), 2);

        // The level is over
        assert_eq!(game.move_player(Direction::Left), MoveOutcome::Blocked);
        assert!(game.hint().unwrap().is_empty());
        assert_eq!(game.tick(), GameStatus::Completed { all_markers: true });
    }

    #[test]
    fn exit_without_all_markers() {
        let mut game = game_from_rows(&[
            "########", //
            "#....*##", //
            "#.######", //
            "#.....E#", //
            "########", //
            "########", //
            "########", //
            "########", //
        ]);
        let outcome = walk(&mut game, "ddrrrrr");
        assert_eq!(outcome, MoveOutcome::ExitReached { all_markers: false });
        assert_eq!(game.status(), GameStatus::Completed { all_markers: false });
        assert!(!game.is_collected(Position::new(5, 1)));
    }

    #[test]
    fn countdown_ends_the_level() {
        let mut game = test_game();
        for _ in 0..89 {
            assert_eq!(game.tick(), GameStatus::Playing);
        }
        assert_eq!(game.elapsed(), Duration::from_secs(89));
        assert_eq!(game.tick(), GameStatus::TimeUp);
        assert_eq!(game.time_left(), 0);
        assert_eq!(game.tick(), GameStatus::TimeUp);
        assert_eq!(game.move_player(Direction::Right), MoveOutcome::Blocked);
    }

    #[test]
    fn hint_follows_the_corridor() {
        let mut game = test_game();
        walk(&mut game, "rrrrr");
        let hint = game.hint().unwrap();
        assert_eq!(hint.len(), 14);
        assert_eq!(hint.first(), Some(&Position::new(6, 2)));
        assert_eq!(hint.last(), Some(&game.maze().exit));
    }

    #[test]
    fn levels_advance_and_wrap() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = Game::new(0, &mut rng).unwrap();
        game.move_player(Direction::Right);
        game.tick();

        game.restart(&mut rng).unwrap();
        assert_eq!(game.level_index, 0);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.time_left(), 90);

        for expected in 1..levels::LEVELS.len() {
            assert!(!game.next_level(&mut rng).unwrap());
            assert_eq!(game.level_index, expected);
            assert_eq!(game.maze().size(), levels::LEVELS[expected].size);
        }
        assert!(game.is_last_level());
        assert!(game.next_level(&mut rng).unwrap());
        assert_eq!(game.level_index, 0);
    }
}
