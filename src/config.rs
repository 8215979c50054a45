/*
config.rs

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

//! Application constants and data directory.

use std::env;
use std::path::PathBuf;

pub const APP_NAME: &str = "tarot-maze";

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Tarot Maze contributors\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "TAROT_MAZE_DATA_DIR";

/// Return the directory where the best times are saved.
///
/// `$TAROT_MAZE_DATA_DIR` wins when set. Otherwise the platform data directory from [`dirs`]
/// (`~/.local/share` on Linux, `~/Library/Application Support` on macOS, `%APPDATA%` on
/// Windows), and the system temporary directory as a last resort.
pub fn data_dir() -> PathBuf {
    resolve_data_dir(env::var_os(DATA_DIR_ENV).map(PathBuf::from), dirs::data_dir())
}

fn resolve_data_dir(override_dir: Option<PathBuf>, platform_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return dir;
    }
    platform_dir
        .map(|d| d.join(APP_NAME))
        .unwrap_or_else(|| env::temp_dir().join(APP_NAME))
}
