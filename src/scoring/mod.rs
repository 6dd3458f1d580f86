mod errors;
pub mod formula;
mod variant;

pub use errors::ScoringError;
pub use formula::score;
pub use variant::FormulaVariant;
