use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::{
    errors::TournamentError,
    models::{Participation, TournamentModel},
    recalculator::{recalculate, validate_positions},
    repository::{ParticipationRepository, PointsUpdate},
};

/// Drives a tournament's points recalculation end to end: load, validate,
/// score, persist.
///
/// The persistence step is all-or-nothing; a failed batch leaves stored
/// points untouched. Recalculations of distinct tournaments share no state
/// and may run concurrently.
pub struct RecalculationService {
    repository: Arc<dyn ParticipationRepository>,
}

impl RecalculationService {
    pub fn new(repository: Arc<dyn ParticipationRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, tournament), fields(tournament_id = %tournament.id))]
    pub async fn recalculate_tournament(
        &self,
        tournament: &TournamentModel,
    ) -> Result<Vec<Participation>, TournamentError> {
        debug!(
            field_size = tournament.field_size,
            variant = %tournament.formula_variant,
            "Recalculating tournament points"
        );

        let participations = self.repository.list_for_tournament(tournament.id).await?;
        validate_positions(&participations)?;

        let recalculated = recalculate(
            participations,
            tournament.field_size,
            tournament.formula_variant,
        )?;

        let updates: Vec<PointsUpdate> = recalculated
            .iter()
            .map(|p| PointsUpdate {
                participation_id: p.id,
                points: p.points,
            })
            .collect();
        self.repository.update_points_batch(&updates).await?;

        info!(
            participation_count = recalculated.len(),
            "Tournament points recalculated"
        );
        Ok(recalculated)
    }
}
