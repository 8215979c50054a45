/*
levels.rs

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

//! Level definitions.
//!
//! Levels are played in order. Each level has its own difficulty, and the difficulty enum doubles
//! as the level selector on the command line.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

use super::maze::{Maze, MazeError};
use super::prim::MazeGenerator;

/// Level difficulty. The enum value is the level index.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialOrd,
    PartialEq,
    Eq,
    Hash,
    ValueEnum,
    FromRepr,
    Default,
)]
#[repr(usize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "Beginner"),
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
            Difficulty::Expert => write!(f, "Expert"),
        }
    }
}

impl Difficulty {
    /// Return the level that has this difficulty.
    pub fn level(self) -> &'static LevelConfig {
        &LEVELS[self as usize]
    }
}

/// Level parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    /// Level number, starting at 1.
    pub id: usize,

    /// Number of rows and columns of the maze.
    pub size: usize,

    /// Time to reach the exit, in seconds.
    pub time_budget: u32,

    /// Number of markers to collect.
    pub markers: usize,

    pub difficulty: Difficulty,
}

impl LevelConfig {
    /// Generate a maze for the level.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Maze, MazeError> {
        MazeGenerator::new(self.size, self.markers)?.generate(rng)
    }
}

/// The levels, in playing order.
pub static LEVELS: [LevelConfig; 5] = [
    LevelConfig {
        id: 1,
        size: 8,
        time_budget: 90,
        markers: 3,
        difficulty: Difficulty::Beginner,
    },
    LevelConfig {
        id: 2,
        size: 10,
        time_budget: 120,
        markers: 4,
        difficulty: Difficulty::Easy,
    },
    LevelConfig {
        id: 3,
        size: 12,
        time_budget: 150,
        markers: 5,
        difficulty: Difficulty::Medium,
    },
    LevelConfig {
        id: 4,
        size: 14,
        time_budget: 180,
        markers: 6,
        difficulty: Difficulty::Hard,
    },
    LevelConfig {
        id: 5,
        size: 16,
        time_budget: 210,
        markers: 7,
        difficulty: Difficulty::Expert,
    },
];

/// Return the level at the given index (0 is the first level).
pub fn get(index: usize) -> Option<&'static LevelConfig> {
    LEVELS.get(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn difficulties_match_level_order() {
        for (i, level) in LEVELS.iter().enumerate() {
            assert_eq!(level.id, i + 1);
            assert_eq!(Difficulty::from_repr(i), Some(level.difficulty));
            assert_eq!(level.difficulty.level(), level);
        }
        assert_eq!(Difficulty::from_repr(LEVELS.len()), None);
        assert!(get(LEVELS.len()).is_none());
    }

    #[test]
    fn every_level_generates() {
        let mut rng = StdRng::seed_from_u64(2024);
        for level in &LEVELS {
            let maze = level.generate(&mut rng).unwrap();
            assert_eq!(maze.size(), level.size);
            assert_eq!(maze.markers.len(), level.markers);
        }
    }
}
