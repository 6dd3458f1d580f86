use std::collections::HashMap;

use uuid::Uuid;

use crate::tournament::Participation;

use super::models::RankingEntry;

struct PlayerAccumulator {
    player_id: Uuid,
    total_points: f64,
    tournaments_played: u32,
    wins: u32,
    positions: Vec<u32>,
}

impl PlayerAccumulator {
    fn new(player_id: Uuid) -> Self {
        Self {
            player_id,
            total_points: 0.0,
            tournaments_played: 0,
            wins: 0,
            positions: Vec::new(),
        }
    }
}

/// Folds scored participations into an ordered ranking.
///
/// Unscored entries are skipped. Grouping preserves the order each player
/// is first seen and the sort is stable, so players tied on total points
/// keep that first-seen order; any replacement tie-break (average position,
/// player id) would change observable output. Rank numbers are dense and
/// distinct even for equal totals.
///
/// The input is a snapshot: nothing is mutated, and the caller is
/// responsible for handing over a consistent, already date-filtered read.
pub fn aggregate(participations: &[Participation]) -> Vec<RankingEntry> {
    let mut accumulators: Vec<PlayerAccumulator> = Vec::new();
    let mut index_by_player: HashMap<Uuid, usize> = HashMap::new();

    for participation in participations {
        let points = match participation.points {
            Some(points) => points,
            None => continue,
        };

        let index = *index_by_player
            .entry(participation.player_id)
            .or_insert_with(|| {
                accumulators.push(PlayerAccumulator::new(participation.player_id));
                accumulators.len() - 1
            });

        let accumulator = &mut accumulators[index];
        accumulator.total_points += points;
        accumulator.tournaments_played += 1;
        if participation.position == Some(1) {
            accumulator.wins += 1;
        }
        if let Some(position) = participation.position {
            accumulator.positions.push(position);
        }
    }

    // Stable: equal totals keep first-seen order.
    accumulators.sort_by(|a, b| b.total_points.total_cmp(&a.total_points));

    accumulators
        .into_iter()
        .enumerate()
        .map(|(index, accumulator)| {
            let average_position = if accumulator.positions.is_empty() {
                None
            } else {
                Some(
                    accumulator.positions.iter().sum::<u32>() as f64
                        / accumulator.positions.len() as f64,
                )
            };

            RankingEntry {
                rank: index as u32 + 1,
                player_id: accumulator.player_id,
                total_points: accumulator.total_points,
                tournaments_played: accumulator.tournaments_played,
                wins: accumulator.wins,
                average_position,
            }
        })
        .collect()
}
