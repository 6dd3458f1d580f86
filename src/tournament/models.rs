use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::FormulaVariant;

/// One player's entry in one tournament.
///
/// `points` is written by recalculation, or set manually by an organizer
/// until the next recalculation overwrites it. The ranking side only ever
/// reads these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participation {
    pub id: Uuid,
    pub player_id: Uuid,
    pub tournament_id: Uuid,
    /// 1-indexed finishing position; `None` while the player is registered
    /// but has not placed.
    pub position: Option<u32>,
    pub points: Option<f64>,
    /// Monetary prize, opaque to the engine and passed through unchanged.
    pub prize: Option<String>,
}

impl Participation {
    pub fn new(player_id: Uuid, tournament_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            player_id,
            tournament_id,
            position: None,
            points: None,
            prize: None,
        }
    }

    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_points(mut self, points: f64) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_prize(mut self, prize: impl Into<String>) -> Self {
        self.prize = Some(prize.into());
        self
    }
}

/// Read-only tournament snapshot the engine scores against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentModel {
    pub id: Uuid,
    pub name: String,
    pub formula_variant: FormulaVariant,
    /// Total entrants considered for scoring; may exceed the number of
    /// recorded finishing positions when registrants never placed.
    pub field_size: u32,
    /// Drives the ranking date window.
    pub finished_at: DateTime<Utc>,
}
