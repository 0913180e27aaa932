//! The error value raised by tour collaborators.

/// Numeric codes for the failures this crate raises itself.
///
/// The code space is open: collaborators define their own values and
/// [`TouristError`] never checks them.
pub mod codes {
    /// The document is not parseable JSON.
    pub const MALFORMED_DOCUMENT: u32 = 100;

    /// The document parsed but is not a tour file.
    pub const INVALID_TOUR_FILE: u32 = 101;

    /// A tour file could not be serialized.
    pub const ENCODE_FAILED: u32 = 102;

    /// A repository name has no entry in the repository index.
    pub const UNKNOWN_REPOSITORY: u32 = 200;

    /// The repository index could not be parsed.
    pub const INVALID_REPO_INDEX: u32 = 201;

    /// No stop matches the given id or position.
    pub const STOP_NOT_FOUND: u32 = 300;
}

/// A failure that aborts a tour operation.
///
/// Carries a machine-readable `code` so callers can branch without
/// matching on `message`, and optionally names the repository the
/// failure belongs to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct TouristError {
    pub code: u32,
    pub message: String,
    pub repo_name: Option<String>,
}

pub type Result<T> = core::result::Result<T, TouristError>;

impl TouristError {
    #[must_use]
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            repo_name: None,
        }
    }

    /// Attributes the error to a repository.
    #[must_use]
    pub fn with_repo(mut self, repo_name: impl Into<String>) -> Self {
        self.repo_name = Some(repo_name.into());
        self
    }
}
