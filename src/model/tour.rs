//! Tour types: the persisted document and its resolved counterpart.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TouristError, codes};

use super::{
    repo::RepoState,
    stop::{
        AbsoluteTourStop, BrokenTourStop, ChildStopRef, ResolvedStop, TourStop, TourStopEdit,
        TourStopPos,
    },
};

/// Wire version written by [`TourFile::new`].
pub const PROTOCOL_VERSION: &str = "1.0";

/// The serializable tour document.
///
/// Stop order is significant: it defines the numbering that
/// [`ChildStopRef::stop_num`] points into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourFile {
    #[serde(default)]
    pub protocol_version: String,

    /// Tag for the tool that produced the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<u32>,

    #[serde(default)]
    pub id: String,

    /// One entry per repository the stops reference.
    pub repositories: Vec<RepoState>,

    pub stops: Vec<TourStop>,
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// The tour's own content version, unrelated to `protocol_version`.
    pub version: String,
}

impl TourFile {
    /// Creates an empty tour with a fresh id.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            protocol_version: PROTOCOL_VERSION.to_string(),
            generator: None,
            id: Uuid::new_v4().to_string(),
            repositories: Vec::new(),
            stops: Vec::new(),
            title: title.into(),
            description: String::new(),
            version: "1.0".to_string(),
        }
    }

    /// Looks up the pinned state for a repository by name.
    #[must_use]
    pub fn repository(&self, name: &str) -> Option<&RepoState> {
        self.repositories.iter().find(|r| r.repository == name)
    }

    /// The stop at a 0-based position.
    #[must_use]
    pub fn stop(&self, stop_num: usize) -> Option<&TourStop> {
        self.stops.get(stop_num)
    }

    /// Follows a child stop reference into this tour.
    ///
    /// Returns `None` if the reference targets another tour or is out of range.
    #[must_use]
    pub fn child_stop(&self, child: &ChildStopRef) -> Option<&TourStop> {
        if child.tour_id != self.id {
            return None;
        }
        self.stop(child.stop_num)
    }

    /// Applies an edit to the stop with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`codes::STOP_NOT_FOUND`] if no stop has that id.
    pub fn edit_stop(&mut self, id: &str, edit: &TourStopEdit) -> Result<&TourStop> {
        let stop = self.stops.iter_mut().find(|s| s.id == id).ok_or_else(|| {
            TouristError::new(codes::STOP_NOT_FOUND, format!("no stop with id {id}"))
        })?;
        stop.apply_edit(edit);
        Ok(stop)
    }
}

/// A resolved tour, ready for display and navigation.
///
/// Broken stops stay in place so numbering matches the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    pub title: String,
    pub stops: Vec<ResolvedStop>,
}

impl Tour {
    /// Stops that resolved to a location.
    #[must_use]
    pub fn navigable(&self) -> impl Iterator<Item = &AbsoluteTourStop> {
        self.stops.iter().filter_map(ResolvedStop::as_absolute)
    }

    /// Stops that could not be located.
    #[must_use]
    pub fn broken(&self) -> impl Iterator<Item = &BrokenTourStop> {
        self.stops.iter().filter_map(ResolvedStop::as_broken)
    }

    /// Where the stop at `index` lives, if it resolved.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<TourStopPos> {
        self.stops.get(index)?.as_absolute().map(AbsoluteTourStop::pos)
    }
}
