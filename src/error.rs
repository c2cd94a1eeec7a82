//=========================================================================
// Error Types
//=========================================================================
//
// Failure taxonomy shared by every subsystem.
//
//   InitializationError  window / configuration failures (fatal)
//   ResourceLoadError    a loader could not produce a resource
//   UnknownStateError    a transition named an unregistered state
//   EngineError          umbrella returned by startup and the main loop
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== ResourceLoadError ===================================================

/// Key reported for loads that bypass the cache.
pub const UNMANAGED_KEY: &str = "<unmanaged>";

/// A loader strategy failed to construct a resource.
///
/// The cache never stores anything for a key whose load failed, so the
/// same key can be retried later.
#[derive(Debug, Error)]
#[error("failed to load resource \"{key}\": {source:#}")]
pub struct ResourceLoadError {
    /// Cache key the load was requested under (`<unmanaged>` for private loads).
    pub key: String,

    /// Underlying decode / I/O failure.
    #[source]
    pub source: anyhow::Error,
}

impl ResourceLoadError {
    pub fn new(key: impl Into<String>, source: anyhow::Error) -> Self {
        Self {
            key: key.into(),
            source,
        }
    }
}

//=== UnknownStateError ===================================================

/// A state name that is not registered with the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown state \"{name}\"")]
pub struct UnknownStateError {
    pub name: String,
}

impl UnknownStateError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

//=== InitializationError =================================================

/// Fatal startup failures that are not resource loads.
#[derive(Debug, Error)]
pub enum InitializationError {
    /// The window backend could not open a presentation surface.
    #[error("failed to initialize the window")]
    Window,

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

//=== EngineError =========================================================

/// Any error surfaced by engine startup or the main loop.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Initialization(#[from] InitializationError),

    #[error(transparent)]
    ResourceLoad(#[from] ResourceLoadError),

    #[error(transparent)]
    UnknownState(#[from] UnknownStateError),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_load_error_names_key_and_cause() {
        let err = ResourceLoadError::new("texture_2D", anyhow::anyhow!("file not found"));
        let message = err.to_string();
        assert!(message.contains("texture_2D"));
        assert!(message.contains("file not found"));
    }

    #[test]
    fn resource_load_error_exposes_source() {
        use std::error::Error as _;
        let err = ResourceLoadError::new("k", anyhow::anyhow!("boom"));
        assert!(err.source().is_some());
    }

    #[test]
    fn unknown_state_error_display() {
        let err = UnknownStateError::new("doesnotexist");
        assert_eq!(err.to_string(), "unknown state \"doesnotexist\"");
    }

    #[test]
    fn engine_error_wraps_each_kind() {
        let e: EngineError = UnknownStateError::new("x").into();
        assert!(matches!(e, EngineError::UnknownState(_)));

        let e: EngineError = InitializationError::Window.into();
        assert!(matches!(e, EngineError::Initialization(InitializationError::Window)));

        let e: EngineError = ResourceLoadError::new("k", anyhow::anyhow!("bad")).into();
        assert!(matches!(e, EngineError::ResourceLoad(_)));
    }
}
