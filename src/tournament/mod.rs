mod errors;
pub mod models;
pub mod recalculator;
pub mod repository;
pub mod service;

pub use errors::TournamentError;
pub use models::{Participation, TournamentModel};
pub use recalculator::{recalculate, validate_positions};
pub use repository::{
    InMemoryParticipationRepository, ParticipationRepository, PointsUpdate,
    PostgresParticipationRepository,
};
pub use service::RecalculationService;
