use std::fs;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use cube_core::{FaceletCube, StickerCube};
use log::{info, warn};

/// Solve a scrambled 3x3x3 cube read from a sticker grid file.
///
/// The output file receives the solution as face letters, one clockwise
/// quarter turn per letter, or a token `Error N` when the input cannot be
/// solved. Only I/O failures terminate with a nonzero exit code.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// File holding the 9-line sticker grid
    input: PathBuf,
    /// File the solution line is written to
    output: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();
    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input)?;
    let line = solve_grid(&text);
    fs::write(&cli.output, &line)?;
    Ok(())
}

/// Run the whole pipeline on the input text, mapping every solver-level
/// failure to its output token.
fn solve_grid(text: &str) -> String {
    let cube = match FaceletCube::from_grid(text).and_then(|f| f.to_cubie_cube()) {
        Ok(cube) => cube,
        Err(e) => {
            warn!("bad input grid: {e}");
            return format!("Error {}", e.code());
        }
    };

    match two_phase::solve(&cube) {
        Ok(solution) => {
            let line = solution.to_string();
            info!(
                "solved in {} face turns ({} quarter turns)",
                solution.face_turns(),
                solution.quarter_turns()
            );
            check_by_replay(text, &line);
            line
        }
        Err(e) => {
            warn!("{e}");
            format!("Error {}", e.code())
        }
    }
}

/// Replay the solution on the raw sticker grid and report whether it
/// really restores the solid coloring.
fn check_by_replay(text: &str, solution: &str) {
    match StickerCube::from_grid(text) {
        Ok(mut sticker) => match sticker.apply_letters(solution) {
            Ok(()) if sticker.is_solved() => info!("replay check passed"),
            Ok(()) => warn!("replay check failed: stickers are not solid"),
            Err(e) => warn!("replay check failed: {e}"),
        },
        Err(e) => warn!("replay check skipped: {e}"),
    }
}
