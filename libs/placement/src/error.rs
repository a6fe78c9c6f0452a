use thiserror::Error;

/// Invalid placement configuration. Raised at startup, never per request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementConfigError {
    #[error("zone attribute name cannot be empty")]
    EmptyZoneAttribute,

    #[error("expected zone count must be at least 1")]
    ZeroZoneCount,

    #[error("invalid expected zone count '{0}'")]
    InvalidZoneCount(String),
}
