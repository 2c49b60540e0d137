use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines, at least one cell must stay free")]
    TooManyMines,
    #[error("A minefield needs at least one mine")]
    NoMines,
    #[error("Board needs at least one row and one column")]
    EmptyBoard,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
