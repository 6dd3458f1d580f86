use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Scoring formula selected per tournament.
///
/// A closed set: dispatch happens in a single match inside
/// [`score`](super::score), not through trait objects. There is no
/// extensibility requirement beyond these three curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormulaVariant {
    /// Lookup table over the paid places, independent of field size.
    Fixed,
    /// Decay curve whose winner pot grows linearly with the field.
    Exponential,
    /// Revised decay curve with a smaller spread between small and large
    /// fields.
    ExponentialV2,
}

impl FormulaVariant {
    /// Parses an external formula token.
    ///
    /// Unrecognized tokens fall back to `Exponential`. Stored tournaments
    /// may carry retired formula names and must keep scoring, so this
    /// fallback is a compatibility rule rather than an error path.
    pub fn from_token(token: &str) -> Self {
        match token {
            "FIXED" => FormulaVariant::Fixed,
            "EXPONENTIAL" => FormulaVariant::Exponential,
            "EXPONENTIAL_V2" => FormulaVariant::ExponentialV2,
            _ => FormulaVariant::Exponential,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            FormulaVariant::Fixed => "FIXED",
            FormulaVariant::Exponential => "EXPONENTIAL",
            FormulaVariant::ExponentialV2 => "EXPONENTIAL_V2",
        }
    }
}

impl fmt::Display for FormulaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_token())
    }
}
