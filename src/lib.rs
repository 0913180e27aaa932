//! Shared data model for code tours.
//!
//! A tour is an ordered list of annotated code locations ("stops").
//! Tours are authored against repository-relative paths and persisted as
//! [`TourFile`] documents. A resolver elsewhere turns them into a [`Tour`]
//! of absolute stops, marking the ones whose code has moved or vanished
//! as broken.
//!
//! This crate only defines the shapes and the checks on them:
//!
//! - [`model`] holds stops, tour files, resolved tours and repository state.
//! - [`validate`] runs shallow structural checks over untyped JSON.
//! - [`document`] decodes and encodes whole tour files as JSON.
//! - [`config`] parses and queries the repository index.
//! - [`error`] defines [`TouristError`].

pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod validate;

pub use config::RepoIndex;
pub use error::{Result, TouristError};
pub use model::{
    AbsoluteTourStop, BrokenError, BrokenTourStop, ChildStopRef, RepoState, ResolvedStop, Tour,
    TourFile, TourStop, TourStopEdit, TourStopPos,
};
pub use validate::{valid_repo_state, valid_tour_file, valid_tour_stop};
