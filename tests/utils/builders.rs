use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use tourneypoints::{
    FormulaVariant, InMemoryParticipationRepository, Participation, TournamentModel,
};

/// A tournament seeded into the in-memory repository, with the ids needed
/// for assertions.
pub struct SeededTournament {
    pub tournament: TournamentModel,
    pub participation_ids: Vec<Uuid>,
}

/// Builds a tournament and its participations and seeds them into a shared
/// in-memory repository.
pub struct TournamentBuilder {
    name: String,
    variant: FormulaVariant,
    field_size: u32,
    finished_at: DateTime<Utc>,
    entries: Vec<(Uuid, Option<u32>, Option<f64>)>,
}

impl TournamentBuilder {
    pub fn new(variant: FormulaVariant, field_size: u32) -> Self {
        Self {
            name: "Test Tournament".to_string(),
            variant,
            field_size,
            finished_at: Utc::now(),
            entries: Vec::new(),
        }
    }

    pub fn finished_at(mut self, finished_at: &str) -> Self {
        self.finished_at = finished_at.parse().expect("valid RFC 3339 timestamp");
        self
    }

    /// Adds a placed entry for the given player.
    pub fn placed(mut self, player_id: Uuid, position: u32) -> Self {
        self.entries.push((player_id, Some(position), None));
        self
    }

    /// Adds a registered entry that never placed.
    pub fn unplaced(mut self, player_id: Uuid) -> Self {
        self.entries.push((player_id, None, None));
        self
    }

    /// Adds an entry with manually overridden points and no position.
    pub fn with_override(mut self, player_id: Uuid, points: f64) -> Self {
        self.entries.push((player_id, None, Some(points)));
        self
    }

    pub fn seed(self, repository: &Arc<InMemoryParticipationRepository>) -> SeededTournament {
        let tournament = TournamentModel {
            id: Uuid::new_v4(),
            name: self.name,
            formula_variant: self.variant,
            field_size: self.field_size,
            finished_at: self.finished_at,
        };

        let mut participations = Vec::new();
        for (player_id, position, points) in self.entries {
            let mut participation = Participation::new(player_id, tournament.id);
            participation.position = position;
            participation.points = points;
            participations.push(participation);
        }

        let participation_ids = participations.iter().map(|p| p.id).collect();
        repository.insert_tournament(&tournament, participations);

        SeededTournament {
            tournament,
            participation_ids,
        }
    }
}
