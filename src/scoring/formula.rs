use super::{FormulaVariant, ScoringError};

/// Points for the first six places under the fixed formula. Positions past
/// the table score zero regardless of field size.
const FIXED_TABLE: [f64; 6] = [10.0, 6.0, 4.0, 3.0, 2.0, 1.0];

/// Per-entrant winner pot multiplier shared by the decay curves.
const BASE_POINTS: f64 = 10.0;

/// Fraction of the winner's points left at the last place under
/// `Exponential`.
const EXPONENTIAL_FLOOR: f64 = 0.01;

/// Last-place fraction under `ExponentialV2`. The gentler tail keeps
/// mid-field finishes in a large event worth more than a win in a tiny one.
const EXPONENTIAL_V2_FLOOR: f64 = 0.05;

/// Converts a finishing position into points under the given formula.
///
/// `position` is 1-indexed and must lie inside the field; positions outside
/// `[1, field_size]` are caller errors, never clamped. All three curves are
/// pure, deterministic, and monotone non-increasing in `position`.
pub fn score(
    position: u32,
    field_size: u32,
    variant: FormulaVariant,
) -> Result<f64, ScoringError> {
    if field_size < 1 {
        return Err(ScoringError::InvalidFieldSize(field_size));
    }
    if position < 1 || position > field_size {
        return Err(ScoringError::PositionOutOfRange {
            position,
            field_size,
        });
    }

    let points = match variant {
        FormulaVariant::Fixed => FIXED_TABLE
            .get(position as usize - 1)
            .copied()
            .unwrap_or(0.0),
        FormulaVariant::Exponential => decay(
            position,
            field_size,
            BASE_POINTS * field_size as f64,
            EXPONENTIAL_FLOOR,
        ),
        FormulaVariant::ExponentialV2 => decay(
            position,
            field_size,
            BASE_POINTS * (field_size as f64).sqrt(),
            EXPONENTIAL_V2_FLOOR,
        ),
    };

    Ok(points)
}

/// Exponential decay from `top` at first place down to `top * floor` at the
/// last place. A single-entrant field has no curve to walk; the winner
/// takes `top`.
fn decay(position: u32, field_size: u32, top: f64, floor: f64) -> f64 {
    if field_size == 1 {
        return top;
    }
    let fraction = (position - 1) as f64 / (field_size - 1) as f64;
    top * floor.powf(fraction)
}
