use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::errors::TournamentError;
use super::models::{Participation, TournamentModel};

/// One participation's new points value inside a batch write.
#[derive(Debug, Clone, PartialEq)]
pub struct PointsUpdate {
    pub participation_id: Uuid,
    pub points: Option<f64>,
}

/// Trait for participation storage operations
#[async_trait]
pub trait ParticipationRepository: Send + Sync {
    /// Loads a tournament's participations ordered by position, unplaced
    /// entries last.
    async fn list_for_tournament(
        &self,
        tournament_id: Uuid,
    ) -> Result<Vec<Participation>, TournamentError>;

    /// Applies every update or none of them. A failure part-way through
    /// must leave stored points exactly as they were.
    async fn update_points_batch(&self, updates: &[PointsUpdate]) -> Result<(), TournamentError>;

    /// Scored participations whose tournament finished inside the inclusive
    /// window, in deterministic tournament-then-entry order.
    async fn list_scored_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Participation>, TournamentError>;

    /// Every scored participation regardless of date.
    async fn list_scored(&self) -> Result<Vec<Participation>, TournamentError>;
}

/// In-memory implementation of ParticipationRepository for development and
/// testing
///
/// Keeps participations in insertion order so list results are
/// deterministic without a real database. Data is lost when the process
/// exits.
pub struct InMemoryParticipationRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    participations: Vec<Participation>,
    finish_times: HashMap<Uuid, DateTime<Utc>>,
}

impl Default for InMemoryParticipationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryParticipationRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Registers a tournament and its participations for later queries
    pub fn insert_tournament(&self, tournament: &TournamentModel, entries: Vec<Participation>) {
        let mut inner = self.inner.lock().unwrap();
        inner
            .finish_times
            .insert(tournament.id, tournament.finished_at);
        inner.participations.extend(entries);
    }

    /// Returns the current number of participations in the repository
    pub fn participation_count(&self) -> usize {
        self.inner.lock().unwrap().participations.len()
    }

    /// Looks up a single participation by ID (useful for assertions)
    pub fn participation(&self, id: Uuid) -> Option<Participation> {
        self.inner
            .lock()
            .unwrap()
            .participations
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}

#[async_trait]
impl ParticipationRepository for InMemoryParticipationRepository {
    #[instrument(skip(self))]
    async fn list_for_tournament(
        &self,
        tournament_id: Uuid,
    ) -> Result<Vec<Participation>, TournamentError> {
        debug!(tournament_id = %tournament_id, "Listing participations from memory");

        let inner = self.inner.lock().unwrap();
        let mut entries: Vec<Participation> = inner
            .participations
            .iter()
            .filter(|p| p.tournament_id == tournament_id)
            .cloned()
            .collect();
        entries.sort_by_key(|p| (p.position.is_none(), p.position));

        Ok(entries)
    }

    #[instrument(skip(self, updates))]
    async fn update_points_batch(&self, updates: &[PointsUpdate]) -> Result<(), TournamentError> {
        debug!(update_count = updates.len(), "Applying points batch in memory");

        let mut inner = self.inner.lock().unwrap();

        // Resolve every target before touching anything so a missing id
        // cannot leave the batch half-applied.
        let mut indices = Vec::with_capacity(updates.len());
        for update in updates {
            match inner
                .participations
                .iter()
                .position(|p| p.id == update.participation_id)
            {
                Some(index) => indices.push(index),
                None => {
                    warn!(participation_id = %update.participation_id, "Participation not found, aborting batch");
                    return Err(TournamentError::NotFound(format!(
                        "participation {} not found",
                        update.participation_id
                    )));
                }
            }
        }

        for (index, update) in indices.into_iter().zip(updates) {
            inner.participations[index].points = update.points;
        }

        debug!(update_count = updates.len(), "Points batch applied in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_scored_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Participation>, TournamentError> {
        debug!(%from, %to, "Listing scored participations in window from memory");

        let inner = self.inner.lock().unwrap();
        let entries = inner
            .participations
            .iter()
            .filter(|p| p.points.is_some())
            .filter(|p| {
                inner
                    .finish_times
                    .get(&p.tournament_id)
                    .map(|finished_at| *finished_at >= from && *finished_at <= to)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        Ok(entries)
    }

    #[instrument(skip(self))]
    async fn list_scored(&self) -> Result<Vec<Participation>, TournamentError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .participations
            .iter()
            .filter(|p| p.points.is_some())
            .cloned()
            .collect())
    }
}

/// PostgreSQL implementation of participation repository
pub struct PostgresParticipationRepository {
    pool: PgPool,
}

impl PostgresParticipationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn participation_from_row(row: &sqlx::postgres::PgRow) -> Participation {
        Participation {
            id: row.get("id"),
            player_id: row.get("player_id"),
            tournament_id: row.get("tournament_id"),
            position: row
                .get::<Option<i32>, _>("finish_position")
                .map(|position| position as u32),
            points: row.get("points"),
            prize: row.get("prize"),
        }
    }
}

#[async_trait]
impl ParticipationRepository for PostgresParticipationRepository {
    #[instrument(skip(self))]
    async fn list_for_tournament(
        &self,
        tournament_id: Uuid,
    ) -> Result<Vec<Participation>, TournamentError> {
        debug!(tournament_id = %tournament_id, "Listing participations from database");

        let rows = sqlx::query(
            "SELECT id, player_id, tournament_id, finish_position, points, prize \
             FROM participations WHERE tournament_id = $1 \
             ORDER BY finish_position ASC NULLS LAST, id ASC",
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, tournament_id = %tournament_id, "Failed to list participations");
            TournamentError::Repository(e.to_string())
        })?;

        Ok(rows.iter().map(Self::participation_from_row).collect())
    }

    #[instrument(skip(self, updates))]
    async fn update_points_batch(&self, updates: &[PointsUpdate]) -> Result<(), TournamentError> {
        debug!(update_count = updates.len(), "Applying points batch in database");

        let mut tx = self.pool.begin().await.map_err(|e| {
            warn!(error = %e, "Failed to begin points transaction");
            TournamentError::Repository(e.to_string())
        })?;

        for update in updates {
            let result = sqlx::query("UPDATE participations SET points = $2 WHERE id = $1")
                .bind(update.participation_id)
                .bind(update.points)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    warn!(error = %e, participation_id = %update.participation_id, "Points update failed, rolling back");
                    TournamentError::Repository(e.to_string())
                })?;

            if result.rows_affected() == 0 {
                // Dropping the transaction without committing rolls back
                // every update already issued.
                warn!(participation_id = %update.participation_id, "Participation not found, rolling back batch");
                return Err(TournamentError::NotFound(format!(
                    "participation {} not found",
                    update.participation_id
                )));
            }
        }

        tx.commit().await.map_err(|e| {
            warn!(error = %e, "Failed to commit points transaction");
            TournamentError::Repository(e.to_string())
        })?;

        debug!(update_count = updates.len(), "Points batch committed");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_scored_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Participation>, TournamentError> {
        debug!(%from, %to, "Listing scored participations in window from database");

        let rows = sqlx::query(
            "SELECT p.id, p.player_id, p.tournament_id, p.finish_position, p.points, p.prize \
             FROM participations p \
             JOIN tournaments t ON t.id = p.tournament_id \
             WHERE p.points IS NOT NULL AND t.finished_at >= $1 AND t.finished_at <= $2 \
             ORDER BY t.finished_at ASC, p.id ASC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list scored participations in window");
            TournamentError::Repository(e.to_string())
        })?;

        Ok(rows.iter().map(Self::participation_from_row).collect())
    }

    #[instrument(skip(self))]
    async fn list_scored(&self) -> Result<Vec<Participation>, TournamentError> {
        let rows = sqlx::query(
            "SELECT p.id, p.player_id, p.tournament_id, p.finish_position, p.points, p.prize \
             FROM participations p \
             JOIN tournaments t ON t.id = p.tournament_id \
             WHERE p.points IS NOT NULL \
             ORDER BY t.finished_at ASC, p.id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list scored participations");
            TournamentError::Repository(e.to_string())
        })?;

        Ok(rows.iter().map(Self::participation_from_row).collect())
    }
}
