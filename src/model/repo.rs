//! Repository state: which revision a tour was authored against.

use serde::{Deserialize, Serialize};

/// Pins a repository name to a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoState {
    pub repository: String,
    pub commit: String,
}

impl RepoState {
    #[must_use]
    pub fn new(repository: impl Into<String>, commit: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            commit: commit.into(),
        }
    }
}
