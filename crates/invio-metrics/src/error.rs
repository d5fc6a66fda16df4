use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("metric {0} is already registered with a different shape")]
    ShapeMismatch(String),

    #[error("metric {0} is not registered")]
    NotRegistered(String),

    #[error("metric {name} is registered as a {kind}")]
    KindMismatch { name: String, kind: &'static str },

    #[error("metrics registry lock is poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, MetricsError>;
