use std::{fmt, io, path::PathBuf};

use machine_learning::MlErr;
use rand_distr::uniform::Error as UniformError;

/// The estimator's result type.
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// All errors that can occur while starting or using a session.
#[derive(Debug)]
pub enum EstimatorError {
    /// Invalid configuration, caught before training.
    InvalidConfig(String),
    /// Schema capture, encoding, fitting or prediction failed.
    Ml(MlErr),
    Io { path: PathBuf, source: io::Error },
    Json(serde_json::Error),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Ml(e) => write!(f, "{e}"),
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Json(e) => write!(f, "malformed config: {e}"),
        }
    }
}

impl std::error::Error for EstimatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ml(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Json(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<MlErr> for EstimatorError {
    fn from(e: MlErr) -> Self {
        Self::Ml(e)
    }
}

impl From<serde_json::Error> for EstimatorError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<UniformError> for EstimatorError {
    fn from(e: UniformError) -> Self {
        Self::InvalidConfig(e.to_string())
    }
}
