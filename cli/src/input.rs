use sweeper_core::{Action, CellCount, Coord, Coord2, GameConfig, GameError, Move};
use thiserror::Error;

/// Player input that could not be turned into a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Expected three values: column, row and \"free\" or \"mine\"")]
    WrongFieldCount,
    #[error("\"{0}\" is not a positive number")]
    NotANumber(String),
    #[error("Coordinates must be within 1..={columns} for the column and 1..={rows} for the row")]
    OutOfRange { rows: Coord, columns: Coord },
    #[error("Unknown command \"{0}\", use \"free\" or \"mine\"")]
    UnknownCommand(String),
    #[error(transparent)]
    Config(#[from] GameError),
}

/// Parses `column row command`, 1-indexed, into a move on the 0-indexed `(row, column)` grid.
pub fn parse_move(line: &str, (rows, columns): Coord2) -> Result<Move, InputError> {
    let [column, row, command] = split_fields(line)?;

    let column = parse_position(column)?;
    let row = parse_position(row)?;
    let coords = to_index(row, rows)
        .zip(to_index(column, columns))
        .ok_or(InputError::OutOfRange { rows, columns })?;

    let action = match command {
        "free" => Action::Reveal,
        "mine" => Action::ToggleFlag,
        other => return Err(InputError::UnknownCommand(other.to_owned())),
    };

    Ok(Move { coords, action })
}

/// Parses the answer to the mine count prompt and checks it fits the board.
pub fn parse_mine_count(line: &str, size: Coord2) -> Result<GameConfig, InputError> {
    let text = line.trim();
    let mines: CellCount = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_owned()))?;
    Ok(GameConfig::new(size, mines)?)
}

fn split_fields(line: &str) -> Result<[&str; 3], InputError> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(column), Some(row), Some(command), None) => Ok([column, row, command]),
        _ => Err(InputError::WrongFieldCount),
    }
}

fn parse_position(text: &str) -> Result<u32, InputError> {
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_owned()))
}

/// 1-indexed position to a 0-indexed axis index, `None` when off the board.
fn to_index(position: u32, len: Coord) -> Option<Coord> {
    position
        .checked_sub(1)
        .and_then(|index| Coord::try_from(index).ok())
        .filter(|&index| index < len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_comes_first_and_is_one_indexed() {
        let mv = parse_move("3 2 free", (9, 9)).unwrap();

        assert_eq!(mv, Move::reveal((1, 2)));
    }

    #[test]
    fn mine_command_toggles_a_flag() {
        let mv = parse_move("  9\t1   mine \n", (9, 9)).unwrap();

        assert_eq!(mv, Move::toggle_flag((0, 8)));
    }

    #[test]
    fn axes_are_checked_against_their_own_bound() {
        // 3 rows, 5 columns
        assert_eq!(parse_move("5 3 free", (3, 5)).unwrap(), Move::reveal((2, 4)));
        assert_eq!(
            parse_move("3 5 free", (3, 5)),
            Err(InputError::OutOfRange { rows: 3, columns: 5 })
        );
    }

    #[test]
    fn zero_and_huge_positions_are_out_of_range() {
        let out_of_range = Err(InputError::OutOfRange { rows: 9, columns: 9 });

        assert_eq!(parse_move("0 1 free", (9, 9)), out_of_range);
        assert_eq!(parse_move("1 10 free", (9, 9)), out_of_range);
        assert_eq!(parse_move("1 4000000000 free", (9, 9)), out_of_range);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert_eq!(parse_move("", (9, 9)), Err(InputError::WrongFieldCount));
        assert_eq!(parse_move("1 2", (9, 9)), Err(InputError::WrongFieldCount));
        assert_eq!(parse_move("1 2 free now", (9, 9)), Err(InputError::WrongFieldCount));
        assert_eq!(
            parse_move("a 2 free", (9, 9)),
            Err(InputError::NotANumber("a".to_owned()))
        );
        assert_eq!(
            parse_move("-1 2 free", (9, 9)),
            Err(InputError::NotANumber("-1".to_owned()))
        );
        assert_eq!(
            parse_move("1 2 open", (9, 9)),
            Err(InputError::UnknownCommand("open".to_owned()))
        );
    }

    #[test]
    fn mine_count_must_leave_a_free_cell() {
        assert_eq!(parse_mine_count("10\n", (9, 9)).unwrap().mines, 10);
        assert_eq!(
            parse_mine_count("81", (9, 9)),
            Err(InputError::Config(GameError::TooManyMines))
        );
        assert_eq!(
            parse_mine_count("0", (9, 9)),
            Err(InputError::Config(GameError::NoMines))
        );
        assert_eq!(
            parse_mine_count("many", (9, 9)),
            Err(InputError::NotANumber("many".to_owned()))
        );
    }
}
