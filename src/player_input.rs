/*
player_input.rs

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

//! Translate the player's input into game commands.
//!
//! Movement keys follow the web version of the game: arrow key names, `w`/`a`/`s`/`d`, and the
//! keys at the same place on a Russian keyboard layout (`ц`/`ф`/`ы`/`в`).

use crate::generator::grid::Direction;

/// Command entered by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Hint,
    Restart,
    Quit,
}

impl Direction {
    /// Return the direction for the given key name, or None if the key is not a movement key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "ц" | "up" => Some(Direction::Up),
            "ArrowDown" | "s" | "ы" | "down" => Some(Direction::Down),
            "ArrowLeft" | "a" | "ф" | "left" => Some(Direction::Left),
            "ArrowRight" | "d" | "в" | "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Command {
    /// Parse one input word.
    pub fn parse(word: &str) -> Option<Self> {
        if let Some(d) = Direction::from_key(word) {
            return Some(Command::Move(d));
        }
        match word.to_lowercase().as_str() {
            "h" | "hint" => Some(Command::Hint),
            "r" | "restart" => Some(Command::Restart),
            "q" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// Parse an input line. Each word is a command, and a word made of movement letters only,
    /// such as `ddss`, gives one move per letter.
    pub fn parse_line(line: &str) -> Vec<Self> {
        let mut commands: Vec<Self> = Vec::new();

        for word in line.split_whitespace() {
            if let Some(c) = Self::parse(word) {
                commands.push(c);
                continue;
            }
            let moves: Option<Vec<Self>> = word
                .chars()
                .map(|c| Direction::from_key(c.encode_utf8(&mut [0; 4])).map(Command::Move))
                .collect();
            match moves {
                Some(m) => commands.extend(m),
                None => log::debug!("Ignoring unknown input {word:?}"),
            }
        }
        commands
    }
}
