//! Core data model for tours.
//!
//! Stops exist in three forms: [`TourStop`] as authored and persisted,
//! [`AbsoluteTourStop`] once resolved to a file on disk, and
//! [`BrokenTourStop`] when resolution failed. [`ResolvedStop`] holds
//! either of the last two.

mod repo;
mod stop;
mod tour;

pub use repo::RepoState;
pub use stop::{
    AbsoluteTourStop, BrokenError, BrokenTourStop, ChildStopRef, ResolvedStop, TourStop,
    TourStopEdit, TourStopPos,
};
pub use tour::{PROTOCOL_VERSION, Tour, TourFile};
