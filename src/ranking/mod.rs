pub mod aggregator;
mod errors;
pub mod models;
pub mod service;

pub use aggregator::aggregate;
pub use errors::RankingError;
pub use models::RankingEntry;
pub use service::RankingService;
