use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Field size must be at least 1, got {0}")]
    InvalidFieldSize(u32),

    #[error("Position {position} is outside the field of {field_size}")]
    PositionOutOfRange { position: u32, field_size: u32 },
}
