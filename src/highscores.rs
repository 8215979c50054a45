/*
highscores.rs

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

//! Manage the best times for the levels.
//!
//! The main object, [`HighScores`], maintains a list of the fastest completions for each level.
//! This object is saved when the player completes a level and makes it to the scoreboard, and
//! is restored when the game starts.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::HashMap;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::generator::levels::LevelConfig;

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// How long did it take to reach the exit.
    pub time: Duration,

    /// Number of moves.
    pub moves: usize,

    /// Number of collected markers.
    pub markers: usize,

    /// Completion timestamp, which is used to display the date and time in the scoreboard.
    pub when: SystemTime,
}

/// Sorted list of the top scores for a level.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct LevelHighScoreBoard {
    /// Sorted list of the top scores, fastest first.
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl LevelHighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A new score goes after the existing
    /// scores with the same time.
    fn add_score(&mut self, score: Score) -> Option<usize> {
        let index: usize = self.top.partition_point(|s| s.time <= score.time);
        if index >= BOARD_SIZE {
            return None;
        }
        self.top.insert(index, score);
        self.top.truncate(BOARD_SIZE);
        Some(index + 1)
    }
}

/// List of the scoreboards for the levels.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Map of the [`LevelHighScoreBoard`] scoreboards indexed by the level.
    ///
    /// The level index is a string in the format "<level_id>@@<difficulty>".
    board: HashMap<String, LevelHighScoreBoard>,
}

impl HighScores {
    /// Create a [`HighScores`] object.
    pub fn new() -> Self {
        Self {
            board: HashMap::new(),
        }
    }

    /// Return the string that is used as an index for the list of scoreboards.
    fn build_key(level: &LevelConfig) -> String {
        format!("{}@@{}", level.id, level.difficulty)
    }

    /// Add a completion of the given level to its scoreboard and return the position in the
    /// scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(
        &mut self,
        level: &LevelConfig,
        time: Duration,
        moves: usize,
        markers: usize,
    ) -> Option<usize> {
        let scoreboard: &mut LevelHighScoreBoard =
            self.board.entry(Self::build_key(level)).or_default();

        scoreboard.add_score(Score {
            time,
            moves,
            markers,
            when: SystemTime::now(),
        })
    }

    /// Return the list of [`Score`] for the given level, fastest first.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, level: &LevelConfig) -> Option<&Vec<Score>> {
        self.board
            .get(&Self::build_key(level))
            .map(|b| &b.top)
            .filter(|top| !top.is_empty())
    }

    /// Return the best time for the given level.
    pub fn best(&self, level: &LevelConfig) -> Option<Duration> {
        self.get_score(level)
            .and_then(|top| top.first())
            .map(|s| s.time)
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any level)
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::levels::LEVELS;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn scores_are_sorted() {
        let mut hs = HighScores::new();
        assert!(hs.is_empty());
        assert_eq!(hs.best(&LEVELS[0]), None);

        assert_eq!(hs.add_score(&LEVELS[0], secs(40), 30, 3), Some(1));
        assert_eq!(hs.add_score(&LEVELS[0], secs(20), 25, 2), Some(1));
        assert_eq!(hs.add_score(&LEVELS[0], secs(30), 28, 3), Some(2));
        assert_eq!(hs.add_score(&LEVELS[0], secs(30), 26, 1), Some(3));

        let times: Vec<u64> = hs
            .get_score(&LEVELS[0])
            .unwrap()
            .iter()
            .map(|s| s.time.as_secs())
            .collect();
        assert_eq!(times, vec![20, 30, 30, 40]);
        assert_eq!(hs.best(&LEVELS[0]), Some(secs(20)));
        assert!(!hs.is_empty());
    }

    #[test]
    fn levels_have_separate_boards() {
        let mut hs = HighScores::new();
        hs.add_score(&LEVELS[1], secs(50), 40, 4);
        assert!(hs.get_score(&LEVELS[0]).is_none());
        assert_eq!(hs.best(&LEVELS[1]), Some(secs(50)));
    }

    #[test]
    fn board_keeps_the_fastest_ten() {
        let mut hs = HighScores::new();
        for t in 1..=BOARD_SIZE as u64 {
            assert_eq!(hs.add_score(&LEVELS[2], secs(t * 10), 10, 0), Some(t as usize));
        }
        // Slower than everything on a full board
        assert_eq!(hs.add_score(&LEVELS[2], secs(500), 10, 0), None);
        // Faster than the last entry, which drops off
        assert_eq!(hs.add_score(&LEVELS[2], secs(15), 10, 0), Some(2));

        let top = hs.get_score(&LEVELS[2]).unwrap();
        assert_eq!(top.len(), BOARD_SIZE);
        assert_eq!(top.last().map(|s| s.time), Some(secs(90)));
    }
}
