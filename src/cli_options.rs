/*
cli_options.rs

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

//! Process command-line options and run the game.
//!
//! Without options, the game starts at the selected level and reads the player's moves from the
//! standard input.
//! The other options are intended for developers tuning the levels.
//!
//! # Examples
//!
//! List the levels:
//!
//! ```text
//! $ tarot-maze --ls
//! 1 Beginner  8x8    90s  3 markers
//! 2 Easy      10x10  120s 4 markers
//! 3 Medium    12x12  150s 5 markers
//! 4 Hard      14x14  180s 6 markers
//! 5 Expert    16x16  210s 7 markers
//! ```
//!
//! Print a reproducible maze with the solution:
//!
//! ```text
//! $ tarot-maze -f easy --seed 42 --hint
//! ```
//!
//! Generate 100 mazes for the hard level, verify them, and print statistics:
//!
//! ```text
//! $ tarot-maze -f hard -c 100 --summary
//! ```

use chrono::{DateTime, Local};
use clap::Parser;
use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use crate::config::{self, COPYRIGHT_NOTICE};
use crate::draw::{self, Draw};
use crate::game::{Game, GameStatus, MoveOutcome};
use crate::generator::grid::Position;
use crate::generator::levels::{self, Difficulty, LevelConfig};
use crate::generator::maze::{Maze, MazeError};
use crate::generator::path_finder::PathFinder;
use crate::highscores::HighScores;
use crate::player_input::Command;
use crate::saver::highscores::SaverHighScores;

/// Find the way out of the tarot maze and collect the markers on the way.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the levels
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Level to play or to generate mazes for
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Beginner)]
    difficulty: Difficulty,

    /// Seed for the random generator, to reproduce a maze
    #[arg(long)]
    seed: Option<u64>,

    /// Print a maze with the shortest path from the start to the exit
    #[arg(long, default_value_t = false)]
    hint: bool,

    /// Print a maze in JSON format
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Number of mazes to generate and verify
    #[arg(short, long, group = "generate")]
    count: Option<usize>,

    /// Print some statistics after generating the mazes
    #[arg(short, long, default_value_t = false, requires = "generate")]
    summary: bool,

    /// Print the best times
    #[arg(long, default_value_t = false)]
    scores: bool,

    /// Delete the best times
    #[arg(long, default_value_t = false)]
    clear_scores: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options. Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let level: &LevelConfig = args.difficulty.level();

    let ret: Result<(), Box<dyn Error>> = if args.ls {
        list_levels();
        Ok(())
    } else if args.scores {
        print_scores()
    } else if args.clear_scores {
        SaverHighScores::new(config::data_dir()).delete()
    } else if let Some(count) = args.count {
        generate(level, count, args.summary, &mut rng)
    } else if args.hint || args.json {
        print_maze(level, args.hint, args.json, &mut rng)
    } else {
        play(level, &mut rng)
    };

    match ret {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Load the saved best times. A file that cannot be read gives an empty list.
fn load_highscores(saver: &SaverHighScores) -> HighScores {
    match saver.load() {
        Ok(Some(h)) => h,
        Ok(None) => HighScores::new(),
        Err(e) => {
            warn!("Cannot read the best times: {e}");
            HighScores::new()
        }
    }
}

//
// List the levels
//
fn list_levels() {
    let highscores: HighScores = load_highscores(&SaverHighScores::new(config::data_dir()));

    for level in &levels::LEVELS {
        let best: String = match highscores.best(level) {
            Some(t) => format!("  best {}", draw::format_time(t.as_secs())),
            None => String::new(),
        };
        println!(
            "{} {:<9} {:<6} {:<4} {} markers{best}",
            level.id,
            level.difficulty.to_string(),
            format!("{}x{}", level.size, level.size),
            format!("{}s", level.time_budget),
            level.markers
        );
    }
}

//
// Print the scoreboards
//
fn print_scores() -> Result<(), Box<dyn Error>> {
    let saver: SaverHighScores = SaverHighScores::new(config::data_dir());
    let highscores: HighScores = saver.load()?.unwrap_or_default();

    if highscores.is_empty() {
        println!("No best times yet.");
        return Ok(());
    }
    for level in &levels::LEVELS {
        let Some(scores) = highscores.get_score(level) else {
            continue;
        };
        println!("Level {}: {}", level.id, level.difficulty);
        for (i, s) in scores.iter().enumerate() {
            let dt: DateTime<Local> = DateTime::from(s.when);
            println!(
                "{:>3}. {}  {} moves  {}/{} markers  {}",
                i + 1,
                draw::format_time(s.time.as_secs()),
                s.moves,
                s.markers,
                level.markers,
                dt.format("%Y-%m-%d %H:%M")
            );
        }
    }
    Ok(())
}

//
// Print a single maze
//
fn print_maze(
    level: &LevelConfig,
    hint: bool,
    json: bool,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let maze: Maze = level.generate(rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&maze)?);
    }
    if hint {
        let path: Vec<Position> = PathFinder::new(&maze).shortest_path(maze.start)?;
        print!("{}", Draw::new(&maze).with_hint(&path).render());
        println!("Shortest path: {} steps", path.len());
    }
    Ok(())
}

//
// Generate and verify several mazes
//
fn generate(
    level: &LevelConfig,
    count: usize,
    summary: bool,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut total_steps: usize = 0;
    let mut total_cells: usize = 0;

    for i in 0..count {
        debug!("Iteration {i}");

        let start: Instant = Instant::now();
        let maze: Maze = level.generate(rng)?;
        let duration: f32 = start.elapsed().as_secs_f32();
        total += duration;
        if duration > max {
            max = duration;
        }

        // Verify the maze before printing it
        if !maze.is_perfect() {
            let picture: String = Draw::new(&maze).render();
            return Err(format!("maze {} is not a perfect maze:\n{picture}", i + 1).into());
        }
        let steps: usize = PathFinder::new(&maze)
            .distance(maze.start)?
            .ok_or_else(|| format!("maze {}: the exit cannot be reached", i + 1))?;
        total_steps += steps;
        total_cells += maze.grid.path_cells().count();

        println!("{}", Draw::new(&maze).render());
    }

    // Print some stats
    if summary && count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
average path cells = {}
average exit steps = {}",
            total,
            total / count as f32,
            max,
            total_cells as f32 / count as f32,
            total_steps as f32 / count as f32
        );
    }
    Ok(())
}

//
// Interactive game
//
fn print_board(game: &Game, hint: &[Position]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out)?;
    write!(out, "{}", Draw::from_game(game).with_hint(hint).render())?;
    writeln!(out, "{}", draw::status_line(game))?;
    write!(out, "move (w/a/s/d), h hint, r restart, q quit> ")?;
    out.flush()
}

/// Record the completion of the current level and move on to the next one.
fn complete_level(
    game: &mut Game,
    all_markers: bool,
    highscores: &mut HighScores,
    saver: &SaverHighScores,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let level: &LevelConfig = game.level();
    let time: Duration = game.elapsed();

    println!();
    println!("Level {} completed!", level.id);
    println!("  moves: {}", game.moves());
    println!("  time: {}s", time.as_secs());
    println!(
        "  markers: {}/{}",
        game.collected_count(),
        game.maze().markers.len()
    );
    if all_markers {
        println!("  You collected ALL the markers!");
    }

    if let Some(rank) = highscores.add_score(level, time, game.moves(), game.collected_count()) {
        println!("  New entry in the best times: #{rank}");
        if let Err(e) = saver.store(highscores) {
            warn!("Cannot save the best times: {e}");
        }
    }

    if game.is_last_level() {
        println!("You completed all the levels!");
    }
    if game.next_level(rng)? {
        println!("Starting over from level 1.");
    }
    Ok(())
}

/// How the processing of an input line ended.
#[derive(Debug, PartialEq)]
enum LineEnd {
    /// Every command ran. Holds the hint trail, empty unless a hint was requested.
    Done(Vec<Position>),

    Quit,

    /// The player reached the exit. The rest of the line is dropped.
    Completed { all_markers: bool },
}

/// Run the commands of one input line against the game.
///
/// A hint anywhere on the line is computed once all the moves are done, so the trail starts
/// from the final position of the player.
fn apply_line<R: Rng>(
    game: &mut Game,
    line: &str,
    last_tick: &mut Instant,
    rng: &mut R,
) -> Result<LineEnd, MazeError> {
    let mut want_hint: bool = false;

    for command in Command::parse_line(line) {
        match command {
            Command::Quit => return Ok(LineEnd::Quit),
            Command::Restart => {
                game.restart(rng)?;
                *last_tick = Instant::now();
            }
            Command::Hint => want_hint = true,
            Command::Move(direction) => match game.move_player(direction) {
                MoveOutcome::ExitReached { all_markers } => {
                    return Ok(LineEnd::Completed { all_markers });
                }
                MoveOutcome::Moved { marker: true } => println!("Marker collected!"),
                MoveOutcome::Moved { marker: false } | MoveOutcome::Blocked => (),
            },
        }
    }
    if want_hint {
        return Ok(LineEnd::Done(game.hint()?));
    }
    Ok(LineEnd::Done(Vec::new()))
}

fn play(level: &LevelConfig, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let saver: SaverHighScores = SaverHighScores::new(config::data_dir());
    let mut highscores: HighScores = load_highscores(&saver);
    let mut game: Game = Game::new(level.id - 1, rng)?;
    let mut hint: Vec<Position> = Vec::new();
    let mut last_tick: Instant = Instant::now();

    print_board(&game, &hint)?;
    for line in io::stdin().lock().lines() {
        let line: String = line?;

        // Count down the seconds spent since the last input
        let secs: u64 = last_tick.elapsed().as_secs();
        last_tick += Duration::from_secs(secs);
        for _ in 0..secs {
            if game.tick() != GameStatus::Playing {
                break;
            }
        }
        if game.status() == GameStatus::TimeUp {
            println!();
            println!(
                "Time is up! Level {}, {} markers collected. Try again!",
                game.level().id,
                game.collected_count()
            );
            game.restart(rng)?;
            last_tick = Instant::now();
            hint.clear();
            print_board(&game, &hint)?;
            continue;
        }

        match apply_line(&mut game, &line, &mut last_tick, rng)? {
            LineEnd::Quit => return Ok(()),
            LineEnd::Done(trail) => hint = trail,
            LineEnd::Completed { all_markers } => {
                complete_level(&mut game, all_markers, &mut highscores, &saver, rng)?;
                last_tick = Instant::now();
                hint.clear();
            }
        }
        print_board(&game, &hint)?;
    }
    println!();
    Ok(())
}
