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

//! Persist the best times in `highscores.json`, in the data directory.
//!
//! The file holds the [`HighScores`] object serialized in JSON by [`serde`]. A new version of the
//! file is first written next to it and then renamed over it, so an interrupted save never
//! leaves a truncated file behind.

use log::{debug, info};
use std::error::Error;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::highscores::HighScores;

const FILE_NAME: &str = "highscores.json";

/// Location of the best-times file.
pub struct SaverHighScores {
    data_dir: PathBuf,
}

impl SaverHighScores {
    pub fn new(data_dir: PathBuf) -> Self {
        debug!("Best times are kept in {}", data_dir.display());
        Self { data_dir }
    }

    fn file(&self) -> PathBuf {
        self.data_dir.join(FILE_NAME)
    }

    /// Read the best times. A missing file gives `None`; any other read or parse failure is
    /// an error.
    pub fn load(&self) -> Result<Option<HighScores>, Box<dyn Error>> {
        let text: String = match fs::read_to_string(self.file()) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&text)?))
    }

    /// Write the best times, creating the data directory on the first save.
    pub fn store(&self, highscores: &HighScores) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(&self.data_dir)?;
        let target: PathBuf = self.file();
        let partial: PathBuf = target.with_extension("json.part");

        fs::write(&partial, serde_json::to_vec(highscores)?)?;
        fs::rename(&partial, &target)?;
        debug!("Saved {}", target.display());
        Ok(())
    }

    /// Remove the best-times file. Removing a file that does not exist succeeds.
    pub fn delete(&self) -> Result<(), Box<dyn Error>> {
        let target: PathBuf = self.file();
        match fs::remove_file(&target) {
            Ok(()) => {
                info!("Deleted {}", target.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("cannot delete {}: {e}", target.display()).into()),
        }
    }
}
