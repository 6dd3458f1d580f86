use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the points table the web layer serializes for clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    /// 1-indexed and dense: players tied on points get distinct consecutive
    /// ranks in first-seen order, not a shared sports-style rank.
    pub rank: u32,
    pub player_id: Uuid,
    pub total_points: f64,
    pub tournaments_played: u32,
    pub wins: u32,
    /// Mean recorded finishing position. `None` when every scored entry in
    /// the window was a points-only override without a position.
    pub average_position: Option<f64>,
}
