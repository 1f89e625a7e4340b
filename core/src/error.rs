use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Pattern must be 5 rows of 5 cells")]
    InvalidBoardShape,
    #[error("Invalid pattern cell {0:?}, expected '0' or '1'")]
    InvalidCell(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
