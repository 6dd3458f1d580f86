use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::tournament::ParticipationRepository;

use super::{aggregator::aggregate, errors::RankingError, models::RankingEntry};

/// Read-only ranking queries over the participation store.
///
/// Each query is a single repository read, so the aggregator always sees a
/// consistent snapshot; date filtering happens in the store and the
/// aggregation itself stays date-agnostic.
pub struct RankingService {
    repository: Arc<dyn ParticipationRepository>,
}

impl RankingService {
    pub fn new(repository: Arc<dyn ParticipationRepository>) -> Self {
        Self { repository }
    }

    /// Ranking over every scored participation on record.
    #[instrument(skip(self))]
    pub async fn ranking(&self) -> Result<Vec<RankingEntry>, RankingError> {
        let participations = self
            .repository
            .list_scored()
            .await
            .map_err(|e| RankingError::Repository(e.to_string()))?;

        debug!(
            participation_count = participations.len(),
            "Aggregating ranking"
        );
        Ok(aggregate(&participations))
    }

    /// Ranking restricted to tournaments finished inside the inclusive
    /// window.
    #[instrument(skip(self))]
    pub async fn ranking_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<RankingEntry>, RankingError> {
        let participations = self
            .repository
            .list_scored_between(from, to)
            .await
            .map_err(|e| RankingError::Repository(e.to_string()))?;

        debug!(
            participation_count = participations.len(),
            %from,
            %to,
            "Aggregating windowed ranking"
        );
        Ok(aggregate(&participations))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::scoring::FormulaVariant;
    use crate::tournament::{InMemoryParticipationRepository, Participation, TournamentModel};

    use super::*;

    fn tournament(finished_at: &str) -> TournamentModel {
        TournamentModel {
            id: Uuid::new_v4(),
            name: "Monthly Open".to_string(),
            formula_variant: FormulaVariant::Fixed,
            field_size: 8,
            finished_at: finished_at.parse().unwrap(),
        }
    }

    fn entry(
        player_id: Uuid,
        tournament_id: Uuid,
        position: Option<u32>,
        points: Option<f64>,
    ) -> Participation {
        let mut participation = Participation::new(player_id, tournament_id);
        participation.position = position;
        participation.points = points;
        participation
    }

    #[tokio::test]
    async fn ranks_across_tournaments() {
        let repo = Arc::new(InMemoryParticipationRepository::new());
        let service = RankingService::new(repo.clone());
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let spring = tournament("2024-03-10T18:00:00Z");
        let autumn = tournament("2024-10-05T18:00:00Z");
        repo.insert_tournament(
            &spring,
            vec![
                entry(a, spring.id, Some(1), Some(10.0)),
                entry(b, spring.id, Some(2), Some(6.0)),
            ],
        );
        repo.insert_tournament(
            &autumn,
            vec![
                entry(b, autumn.id, Some(1), Some(10.0)),
                entry(a, autumn.id, Some(3), Some(4.0)),
            ],
        );

        let ranking = service.ranking().await.unwrap();

        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].player_id, b);
        assert_eq!(ranking[0].total_points, 16.0);
        assert_eq!(ranking[1].player_id, a);
        assert_eq!(ranking[1].total_points, 14.0);
    }

    #[tokio::test]
    async fn window_excludes_out_of_range_tournaments() {
        let repo = Arc::new(InMemoryParticipationRepository::new());
        let service = RankingService::new(repo.clone());
        let a = Uuid::new_v4();

        let spring = tournament("2024-03-10T18:00:00Z");
        let autumn = tournament("2024-10-05T18:00:00Z");
        repo.insert_tournament(&spring, vec![entry(a, spring.id, Some(1), Some(10.0))]);
        repo.insert_tournament(&autumn, vec![entry(a, autumn.id, Some(1), Some(10.0))]);

        let ranking = service
            .ranking_between(
                "2024-01-01T00:00:00Z".parse().unwrap(),
                "2024-06-30T23:59:59Z".parse().unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].total_points, 10.0);
        assert_eq!(ranking[0].tournaments_played, 1);
        assert_eq!(ranking[0].wins, 1);
    }

    #[tokio::test]
    async fn empty_window_gives_empty_ranking() {
        let repo = Arc::new(InMemoryParticipationRepository::new());
        let service = RankingService::new(repo.clone());
        let spring = tournament("2024-03-10T18:00:00Z");
        repo.insert_tournament(
            &spring,
            vec![entry(Uuid::new_v4(), spring.id, Some(1), Some(10.0))],
        );

        let ranking = service
            .ranking_between(
                "2025-01-01T00:00:00Z".parse().unwrap(),
                "2025-12-31T00:00:00Z".parse().unwrap(),
            )
            .await
            .unwrap();

        assert!(ranking.is_empty());
    }
}
