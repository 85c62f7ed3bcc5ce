//! Unified error type definition

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Directory listing error type
#[derive(Error, Debug)]
pub enum ListingError {
    /// The path cannot be statted
    #[error("Cannot stat directory {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The path exists but is not a directory
    #[error("{} is not a real directory!", path.display())]
    NotADirectory { path: PathBuf },

    /// The directory exists but its children cannot be enumerated
    #[error("Cannot read directory {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    /// The path the failed operation was looking at.
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path, .. } | Self::NotADirectory { path } | Self::Read { path, .. } => {
                path
            }
        }
    }

    /// Whether it is expected behavior (user selected something that went away, etc.),
    /// used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotFound { .. } | Self::NotADirectory { .. } => true,
            Self::Read { source, .. } => source.kind() == io::ErrorKind::PermissionDenied,
        }
    }
}

/// In-session navigation error.
///
/// Raised by `DirectoryPane::select`; the pane stays at its previous path.
#[derive(Error, Debug)]
#[error("Cannot navigate to {}: {source}", attempted.display())]
pub struct NavigationError {
    /// The cleaned path the pane tried to move to
    pub attempted: PathBuf,
    #[source]
    pub source: ListingError,
}

impl NavigationError {
    #[must_use]
    pub fn is_expected(&self) -> bool {
        self.source.is_expected()
    }
}

/// Rule runner error type
#[derive(Error, Debug)]
pub enum RunError {
    /// Anything else the engine reports
    #[error("Run failed: {0}")]
    Failed(String),
}

/// Listing layer Result type alias
pub type ListingResult<T> = std::result::Result<T, ListingError>;
