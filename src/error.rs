//! Error type shared by the adapter, parameter handling and loaders.
use crate::routine::RoutineError;
use std::path::PathBuf;

/// Reasons an adapter operation may fail.
///
/// Misuse that would otherwise corrupt the cached result (bad parameters,
/// extracting without an image, reading features that were never computed)
/// is reported here instead of being silently ignored.
#[derive(Debug)]
pub enum GistError {
    /// Block count or orientation list rejected.
    InvalidConfiguration { reason: String },
    /// Input image view is malformed.
    InvalidImage { reason: String },
    /// The operation requires state the adapter does not have yet.
    PreconditionNotMet {
        operation: &'static str,
        reason: &'static str,
    },
    /// Feature dimension queried before any successful extraction.
    NotExtractedYet,
    /// The routine returned a vector whose length disagrees with the settings.
    UnexpectedDimension { expected: usize, actual: usize },
    /// Failure reported by the descriptor routine, passed through unchanged.
    Routine(RoutineError),
    /// Reading a config file or an image from disk failed.
    Io { path: PathBuf, reason: String },
}

impl GistError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GistError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_image(reason: impl Into<String>) -> Self {
        GistError::InvalidImage {
            reason: reason.into(),
        }
    }

    /// True for the misuse class of errors (configuration or ordering of
    /// calls), as opposed to failures coming from the routine or disk.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            GistError::InvalidConfiguration { .. }
                | GistError::InvalidImage { .. }
                | GistError::PreconditionNotMet { .. }
                | GistError::NotExtractedYet
        )
    }
}

impl std::fmt::Display for GistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GistError::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            GistError::InvalidImage { reason } => write!(f, "invalid image: {reason}"),
            GistError::PreconditionNotMet { operation, reason } => {
                write!(f, "{operation}: {reason}")
            }
            GistError::NotExtractedYet => {
                write!(f, "no feature extracted yet, call extract() first")
            }
            GistError::UnexpectedDimension { expected, actual } => write!(
                f,
                "descriptor routine returned {actual} values, expected {expected}"
            ),
            GistError::Routine(err) => write!(f, "descriptor routine failed: {err}"),
            GistError::Io { path, reason } => write!(f, "{}: {reason}", path.display()),
        }
    }
}

impl std::error::Error for GistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GistError::Routine(err) => Some(&**err),
            _ => None,
        }
    }
}

impl From<RoutineError> for GistError {
    fn from(err: RoutineError) -> Self {
        GistError::Routine(err)
    }
}
