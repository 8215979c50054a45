/*
draw.rs

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

//! Draw the maze as text.

use log::{Level, log_enabled, trace};
use std::collections::HashSet;

use crate::game::Game;
use crate::generator::grid::{Cell, Position};
use crate::generator::maze::Maze;

const WALL: char = '#';
const PATH: char = ' ';
const PLAYER: char = '@';
const EXIT: char = 'E';
const MARKER: char = '*';
const MARKER_COLLECTED: char = '+';
const HINT: char = '.';

/// Draw object that is used to render a maze and what is on it.
#[derive(Debug)]
pub struct Draw<'a> {
    maze: &'a Maze,

    player: Position,

    /// Markers that the player already picked up.
    collected: HashSet<Position>,

    /// Cells of the hint trail.
    hint: HashSet<Position>,
}

impl<'a> Draw<'a> {
    /// Create a [`Draw`] object for a maze with the player on the start cell.
    pub fn new(maze: &'a Maze) -> Self {
        Self {
            maze,
            player: maze.start,
            collected: HashSet::new(),
            hint: HashSet::new(),
        }
    }

    /// Create a [`Draw`] object for a game in progress.
    pub fn from_game(game: &'a Game) -> Self {
        let maze: &Maze = game.maze();
        Self {
            maze,
            player: game.player(),
            collected: maze
                .markers
                .iter()
                .copied()
                .filter(|m| game.is_collected(*m))
                .collect(),
            hint: HashSet::new(),
        }
    }

    /// Overlay a hint trail.
    pub fn with_hint(mut self, hint: &[Position]) -> Self {
        self.hint = hint.iter().copied().collect();
        self
    }

    /// Return the character for a cell.
    fn glyph(&self, pos: Position) -> char {
        if self.maze.grid.get(pos) != Some(Cell::Path) {
            return WALL;
        }
        if pos == self.player {
            PLAYER
        } else if pos == self.maze.exit {
            EXIT
        } else if self.maze.is_marker(pos) {
            if self.collected.contains(&pos) {
                MARKER_COLLECTED
            } else {
                MARKER
            }
        } else if self.hint.contains(&pos) {
            HINT
        } else {
            PATH
        }
    }

    /// Render the maze, one line per row.
    pub fn render(&self) -> String {
        let size: usize = self.maze.size();
        let mut s: String = String::with_capacity((size + 1) * size);

        for y in 0..size {
            for x in 0..size {
                s.push(self.glyph(Position::new(x, y)));
            }
            s.push('\n');
        }
        if log_enabled!(Level::Trace) {
            trace!("Rendered maze:\n{s}");
        }
        s
    }
}

/// Format a number of seconds as `MM:SS`.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Return the status line of a game: level, markers, moves, and remaining time.
pub fn status_line(game: &Game) -> String {
    let level = game.level();
    format!(
        "Level {}: {}  markers {}/{}  moves {}  time {}",
        level.id,
        level.difficulty,
        game.collected_count(),
        game.maze().markers.len(),
        game.moves(),
        format_time(u64::from(game.time_left()))
    )
}
