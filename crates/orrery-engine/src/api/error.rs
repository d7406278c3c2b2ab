use thiserror::Error;

/// Errors surfaced while configuring or starting a simulation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid asset manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("asset manifest is missing required texture '{0}'")]
    MissingTexture(String),

    #[error("invalid simulation config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid preset {0}")]
    InvalidPreset(String),
}

pub type EngineResult<T> = Result<T, EngineError>;
