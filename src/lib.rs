// Library crate for the tournament scoring and ranking engine
// This file exposes the public API for integration tests

pub mod ranking;
pub mod scoring;
pub mod tournament;

// Re-export commonly used types for easier access in tests
pub use ranking::{aggregate, RankingEntry, RankingError, RankingService};
pub use scoring::{score, FormulaVariant, ScoringError};
pub use tournament::{
    recalculate, validate_positions, InMemoryParticipationRepository, Participation,
    ParticipationRepository, PointsUpdate, RecalculationService, TournamentError, TournamentModel,
};
