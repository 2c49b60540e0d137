use std::io::{BufRead, Write};

use anyhow::Context;
use sweeper_core::{Action, CellContent, CellView, Coord2, GameConfig, MoveOutcome, PlayEngine};

use crate::input::{parse_mine_count, parse_move};
use crate::render::{render_board, render_status};

pub const MINES_PROMPT: &str = "How many mines do you want on the field? ";
pub const MOVE_PROMPT: &str = "Set/unset mine marks or claim a cell as free: ";
pub const NUMBER_HERE: &str = "There is a number here!";
pub const WON_MESSAGE: &str = "Congratulations! You found all the mines!";
pub const LOST_MESSAGE: &str = "You stepped on a mine and failed!";

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    /// Input ran out before the game finished
    InputClosed,
}

fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read player input")?;
    Ok((read > 0).then_some(line))
}

fn prompt<W: Write>(output: &mut W, text: &str) -> anyhow::Result<()> {
    write!(output, "{text}")?;
    output.flush().context("failed to flush output")
}

/// Asks for the mine count until it fits a board of `size`, `None` if input closes first.
///
/// An empty board fails before anything is asked.
pub fn ask_config<R: BufRead, W: Write>(
    size: Coord2,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<Option<GameConfig>> {
    let size = GameConfig::validate_size(size).context("invalid board settings")?;
    loop {
        prompt(output, MINES_PROMPT)?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_mine_count(&line, size) {
            Ok(config) => return Ok(Some(config)),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

/// Runs the move loop until the game is won, lost, or input runs out.
pub fn play<R: BufRead, W: Write>(
    engine: &mut PlayEngine,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<SessionEnd> {
    write!(output, "{}", render_board(engine))?;

    loop {
        prompt(output, MOVE_PROMPT)?;
        let Some(line) = read_line(input)? else {
            log::info!("Input closed with the game still running");
            return Ok(SessionEnd::InputClosed);
        };

        let mv = match parse_move(&line, engine.size()) {
            Ok(mv) => mv,
            Err(err) => {
                log::debug!("Rejected input {:?}: {}", line.trim_end(), err);
                writeln!(output, "{err}")?;
                continue;
            }
        };

        if mv.action == Action::ToggleFlag
            && matches!(
                engine.cell_at(mv.coords),
                CellView::Revealed(CellContent::Hint(_))
            )
        {
            writeln!(output, "{NUMBER_HERE}")?;
            continue;
        }

        let outcome = engine.apply(mv)?;
        write!(output, "{}", render_board(engine))?;
        match outcome {
            MoveOutcome::Continue => writeln!(output, "{}", render_status(engine))?,
            MoveOutcome::Won => {
                writeln!(output, "{WON_MESSAGE}")?;
                return Ok(SessionEnd::Won);
            }
            MoveOutcome::Lost => {
                writeln!(output, "{LOST_MESSAGE}")?;
                return Ok(SessionEnd::Lost);
            }
        }
    }
}
