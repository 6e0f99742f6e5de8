mod config;
mod solver;

use std::{io::stdin, path::PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, eyre};
use cube_core::{
    CubeState, MoveSequence, parse_moves,
    render::{Color, color_letter, render_net},
};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info, warn};
use owo_colors::OwoColorize;

use crate::{
    config::Config,
    solver::{ProcessSolver, SolverOracle},
};

/// Manipulate a 3x3x3 cube and hand it to an external two-phase solver
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Colour the stickers, overriding the configuration
    #[arg(long)]
    color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where the starting cube comes from.
#[derive(clap::Args)]
struct StartState {
    /// Start from a 54-symbol facelet string (U R F D L B order) instead of a
    /// solved cube
    #[arg(long, short = 'f')]
    facelets: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence and print the cube.
    Show {
        /// The moves to apply, e.g. "R U' F2 x".
        #[arg(default_value = "")]
        moves: String,
        #[command(flatten)]
        start: StartState,
    },
    /// Scramble a solved cube with random face turns.
    Scramble {
        /// Number of random moves; defaults to the configured length.
        #[arg(short, long)]
        count: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the facelet string the external solver would receive.
    Export {
        #[arg(default_value = "")]
        moves: String,
        #[command(flatten)]
        start: StartState,
    },
    /// Solve a cube with the configured external solver and replay the
    /// solution.
    Solve {
        #[command(flatten)]
        start: StartState,
        /// Scramble a solved cube with this many moves instead.
        #[arg(long, conflicts_with = "facelets")]
        scramble: Option<usize>,
        /// Show the solution one move at a time.
        #[arg(long)]
        step: bool,
    },
    /// Step through a move sequence, printing the cube after every move.
    Play {
        moves: String,
        #[command(flatten)]
        start: StartState,
        /// Wait for Enter between moves.
        #[arg(long)]
        step: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let color = cli.color || config.display.color;

    match cli.command {
        Commands::Show { moves, start } => {
            let mut cube = start.build()?;
            cube.apply(&moves)?;
            println!("{}", render(&cube, color));
            println!("Is solved? {}", cube.is_solved());
        }
        Commands::Scramble { count, seed } => {
            let count = count.unwrap_or(config.scramble.length);
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let mut cube = CubeState::solved();
            let scramble = cube.scramble_with_rng(&mut rng, count);

            println!("Scramble: {scramble}");
            println!("{}", render(&cube, color));
            println!("Facelets: {}", cube.to_facelet_string()?);
        }
        Commands::Export { moves, start } => {
            let mut cube = start.build()?;
            cube.apply(&moves)?;
            println!("{}", cube.to_facelet_string()?);
        }
        Commands::Solve {
            start,
            scramble,
            step,
        } => {
            let mut cube = start.build()?;
            if let Some(count) = scramble {
                let scramble = cube.scramble(count);
                println!("Scramble: {scramble}");
            }
            println!("{}", render(&cube, color));

            cube.is_valid_for_solving().wrap_err(
                "Please ensure all 54 stickers were entered correctly and form a valid cube",
            )?;
            let facelets = cube.to_facelet_string()?;

            let mut solver = ProcessSolver::new(config.solver);
            let solution = solver.solve(&facelets)?;
            println!("Solution: {solution} ({} moves)", solution.len());

            if step {
                if !play(&mut cube, &solution, true, color)? {
                    return Ok(());
                }
            } else {
                cube.apply_sequence(&solution);
                println!("{}", render(&cube, color));
            }

            if cube.is_solved() {
                println!("Solved!");
            } else {
                return Err(eyre!("The solver's solution did not solve the cube"));
            }
        }
        Commands::Play { moves, start, step } => {
            let mut cube = start.build()?;
            let moves = parse_moves(&moves)?;
            play(&mut cube, &moves, step, color)?;
            println!("Is solved? {}", cube.is_solved());
        }
    }

    Ok(())
}

impl StartState {
    fn build(&self) -> color_eyre::Result<CubeState> {
        match &self.facelets {
            Some(facelets) => {
                let cube = CubeState::from_facelet_string(facelets)?;
                if let Err(e) = cube.is_valid_for_solving() {
                    warn!("Starting state is not a consistent cube: {e}");
                }
                Ok(cube)
            }
            None => Ok(CubeState::solved()),
        }
    }
}

/// Apply `moves` one at a time, printing the cube after each. With `step`,
/// wait for Enter between moves; `q` stops early and returns `false`.
fn play(
    cube: &mut CubeState,
    moves: &MoveSequence,
    step: bool,
    color: bool,
) -> color_eyre::Result<bool> {
    if moves.is_empty() {
        println!("Nothing to play; the sequence is empty.");
        return Ok(true);
    }

    let total = moves.len();
    let mut line = String::new();
    for (i, &move_) in moves.moves().iter().enumerate() {
        cube.apply_move(move_);
        info!(target: "play", "Played move {}/{total}: {move_}", i + 1);

        println!("{}", "-".repeat(40));
        println!("Move {}/{total}:   {:<3}", i + 1, move_.to_string());
        println!("{}", render(cube, color));
        println!("{}", "-".repeat(40));

        if step && i + 1 < total {
            eprintln!("Press Enter for the next move, or type 'q' to quit.");
            line.clear();
            stdin().read_line(&mut line)?;
            if line.trim().eq_ignore_ascii_case("q") {
                println!("Exiting playback.");
                return Ok(false);
            }
        }
    }

    Ok(true)
}

fn render(cube: &CubeState, color: bool) -> String {
    if !color {
        return cube.to_string();
    }

    render_net(cube, |index| {
        let letter = color_letter(index);
        match Color::from_index(index) {
            Some(Color::White) => letter.bright_white().bold().to_string(),
            Some(Color::Yellow) => letter.yellow().to_string(),
            Some(Color::Blue) => letter.blue().to_string(),
            Some(Color::Green) => letter.green().to_string(),
            Some(Color::Red) => letter.red().to_string(),
            Some(Color::Orange) => letter.truecolor(255, 140, 0).to_string(),
            None => letter.to_string(),
        }
    })
}
