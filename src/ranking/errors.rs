use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Repository error: {0}")]
    Repository(String),
}
