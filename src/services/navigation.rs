//! Ship navigation command
//!
//! Prompts for a destination quadrant and sector, then hands the move to
//! the session.

use crate::game_engine::Session;
use crate::io::{InputReader, OutputWriter};
use crate::models::errors::{GameError, GameResult};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::ui::presenters::NavigationPresenter;

/// Parse "x,y" (or "x y") into a coordinate pair.
pub fn parse_pair(input: &str) -> GameResult<(i32, i32)> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    match parts.as_slice() {
        [x, y] => Ok((x.parse()?, y.parse()?)),
        _ => Err(GameError::InvalidInput(format!(
            "expected two coordinates, got '{}'",
            input.trim()
        ))),
    }
}

/// Moves the ship (Command NAV)
///
/// Reads a quadrant and a sector, each as "x,y" with 0-7 components.
/// Returns `Ok(())` without moving if input runs out; bad coordinates are
/// reported as errors and leave the ship where it is.
pub fn navigate(
    session: &mut Session,
    io: &mut dyn InputReader,
    output: &mut dyn OutputWriter,
) -> GameResult<()> {
    let Some(quadrant) = io.read_line("QUADRANT (X,Y)")? else {
        return Ok(());
    };
    let (qx, qy) = parse_pair(&quadrant)?;

    let Some(sector) = io.read_line("SECTOR (X,Y)")? else {
        return Ok(());
    };
    let (sx, sy) = parse_pair(&sector)?;

    let quadrant = QuadrantPosition::new(qx, qy);
    let requested = SectorPosition::new(sx, sy);
    let landed = session.move_ship(quadrant, requested)?;
    NavigationPresenter::show_arrival(quadrant, requested, landed, output);
    Ok(())
}
