use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("Invalid tournament state: {0}")]
    InvalidState(String),

    #[error("Position {position} is held by more than one participation")]
    InconsistentPositions { position: u32 },

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Not found: {0}")]
    NotFound(String),
}
