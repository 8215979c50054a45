/*
generator.rs

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

//! Generate random mazes and find paths in them.
//!
//! [`levels::LevelConfig`] objects describe the levels: maze size, time budget, number of
//! markers, and difficulty.
//! The list of levels, [`levels::LEVELS`], is fixed and played in order.
//!
//! A level is played on a [`maze::Maze`] object, which you create with a
//! [`prim::MazeGenerator`] object and its [`prim::MazeGenerator::generate`] method.
//! The method takes the random generator to use, so that tests and the `--seed` command-line
//! option can reproduce a maze.
//! The resulting maze is a perfect maze: there is exactly one way between any two path cells.
//!
//! For the hint feature, a [`path_finder::PathFinder`] object returns the shortest path from
//! the player position to the exit with its [`path_finder::PathFinder::shortest_path`] method.
//! Neither object modifies the maze.

pub mod grid;
pub mod levels;
pub mod maze;
pub mod path_finder;
pub mod prim;
