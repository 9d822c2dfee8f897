use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one cell")]
    EmptyBoard,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Coordinates are out of bounds")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
