use std::collections::HashSet;

use crate::scoring::{score, FormulaVariant};

use super::{errors::TournamentError, models::Participation};

/// Rejects participation sets where two entries claim the same finishing
/// position.
///
/// The store owns this invariant; the engine only detects the violation so
/// the caller can refuse the write instead of scoring garbage.
pub fn validate_positions(participations: &[Participation]) -> Result<(), TournamentError> {
    let mut seen = HashSet::new();
    for participation in participations {
        if let Some(position) = participation.position {
            if !seen.insert(position) {
                return Err(TournamentError::InconsistentPositions { position });
            }
        }
    }
    Ok(())
}

/// Re-derives every participation's points from its current position.
///
/// Entries with a recorded position get a fresh score, discarding any prior
/// value including manual overrides. Entries without a position come out
/// unscored. Pure transform: persistence is the caller's job.
pub fn recalculate(
    mut participations: Vec<Participation>,
    field_size: u32,
    variant: FormulaVariant,
) -> Result<Vec<Participation>, TournamentError> {
    if field_size < 1 {
        return Err(TournamentError::InvalidState(format!(
            "field size must be at least 1, got {}",
            field_size
        )));
    }

    for participation in &mut participations {
        participation.points = match participation.position {
            Some(position) => {
                let points = score(position, field_size, variant)
                    .map_err(|err| TournamentError::InvalidState(err.to_string()))?;
                Some(points)
            }
            None => None,
        };
    }

    Ok(participations)
}
