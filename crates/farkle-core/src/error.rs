//! Error types for the Farkle engine.

use std::path::PathBuf;

/// Convenience result type for Farkle operations.
pub type FarkleResult<T> = Result<T, FarkleError>;

/// Errors that can occur while loading rules or playing a turn.
#[derive(Debug, thiserror::Error)]
pub enum FarkleError {
    /// The scoring catalog contains a duplicate or malformed row.
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),

    /// A catalog file could not be read.
    #[error("cannot read catalog {path}: {source}")]
    CatalogIo {
        /// Path of the catalog file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The pattern automaton could not be built from the catalog.
    #[error("cannot build pattern matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),

    /// A roll has the wrong number of dice or a value outside 1-6.
    #[error("invalid roll: {0}")]
    InvalidRoll(String),

    /// The player picked a selection that does not exist.
    #[error("invalid selection: {0}")]
    InvalidSelectionIndex(String),

    /// The player answered the continue/stop prompt with something unknown.
    #[error("invalid response: {0}")]
    InvalidContinueResponse(String),

    /// The player asked to quit.
    #[error("abort requested")]
    AbortRequested,

    /// A game was set up in a way that cannot be played.
    #[error("invalid game: {0}")]
    InvalidGame(String),
}

impl FarkleError {
    /// Whether the turn loop recovers from this error by asking again.
    pub fn is_reprompt(&self) -> bool {
        matches!(
            self,
            Self::InvalidSelectionIndex(_) | Self::InvalidContinueResponse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reprompt_errors() {
        assert!(FarkleError::InvalidSelectionIndex("x".into()).is_reprompt());
        assert!(FarkleError::InvalidContinueResponse("maybe".into()).is_reprompt());
        assert!(!FarkleError::AbortRequested.is_reprompt());
        assert!(!FarkleError::MalformedCatalog("dup".into()).is_reprompt());
    }

    #[test]
    fn display() {
        assert_eq!(
            FarkleError::MalformedCatalog("duplicate pattern 111".into()).to_string(),
            "malformed catalog: duplicate pattern 111"
        );
        assert_eq!(FarkleError::AbortRequested.to_string(), "abort requested");
    }
}
