//! Repository index: where each repository lives on this machine.
//!
//! Kept as a flat TOML table of `name = "path"`:
//!
//! ```toml
//! core = "/home/me/src/core"
//! web = "/home/me/src/web"
//! ```
//!
//! Who owns the file and when it is written is up to the caller; this
//! module only parses and queries it.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TouristError, codes},
    model::TourFile,
};

/// Maps repository names to local filesystem roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoIndex(BTreeMap<String, String>);

impl RepoIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an index from TOML. Every value must be a string.
    ///
    /// # Errors
    ///
    /// Returns [`codes::INVALID_REPO_INDEX`] on bad syntax or a non-string value.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| {
            TouristError::new(
                codes::INVALID_REPO_INDEX,
                format!("invalid repository index: {e}"),
            )
        })
    }

    #[must_use]
    pub fn get(&self, repository: &str) -> Option<&str> {
        self.0.get(repository).map(String::as_str)
    }

    /// Maps a repository to a root, returning the previous root if any.
    pub fn insert(
        &mut self,
        repository: impl Into<String>,
        root: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(repository.into(), root.into())
    }

    pub fn remove(&mut self, repository: &str) -> Option<String> {
        self.0.remove(repository)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Like [`get`](Self::get), but an unmapped repository is an error
    /// attributed to that repository.
    ///
    /// # Errors
    ///
    /// Returns [`codes::UNKNOWN_REPOSITORY`] with `repo_name` set.
    pub fn root_for(&self, repository: &str) -> Result<&str> {
        self.get(repository).ok_or_else(|| {
            tracing::warn!(repository, "repository is not in the index");
            TouristError::new(
                codes::UNKNOWN_REPOSITORY,
                format!("repository {repository} has no local path"),
            )
            .with_repo(repository)
        })
    }

    /// Repositories the tour refers to that have no local root.
    ///
    /// Covers both the pinned `repositories` and the names used by stops.
    /// Sorted, without duplicates.
    #[must_use]
    pub fn missing_repositories<'a>(&self, tour: &'a TourFile) -> Vec<&'a str> {
        let mut missing: Vec<&str> = tour
            .repositories
            .iter()
            .map(|r| r.repository.as_str())
            .chain(tour.stops.iter().map(|s| s.repository.as_str()))
            .filter(|name| !self.0.contains_key(*name))
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

impl FromIterator<(String, String)> for RepoIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RepoIndex {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
