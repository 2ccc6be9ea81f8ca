use thiserror::Error;

/// Invalid physical or geometric input to the planning models.
///
/// Always surfaced to the caller. Missing or malformed parameter files are
/// handled at the persistence boundary and never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("path-loss exponent must be positive, got {0}")]
    NonPositivePathLossExponent(f64),
    #[error("cluster size N must be at least 1, got {0}")]
    InvalidClusterSize(u32),
    #[error("reference distance d0 must be positive, got {0} km")]
    NonPositiveReferenceDistance(f64),
    #[error("parameter {0} must be finite, got {1}")]
    NonFiniteParameter(&'static str, f64),
    #[error("subscriber density must not be negative, got {0}/km²")]
    NegativeDensity(f64),
    #[error("activity ratio must lie in [0, 1], got {0}")]
    InvalidActivityRatio(f64),
    #[error("cell radius must be positive, got {0} km")]
    NonPositiveRadius(f64),
    #[error("no finite cell radius could be resolved")]
    UnboundedRadius,
}

pub type Result<T> = std::result::Result<T, DomainError>;
