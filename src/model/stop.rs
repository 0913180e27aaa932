//! Stop types: a single annotated code location, in every form it takes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A link to a stop in another tour, by position.
///
/// `stop_num` is a 0-based index into the target tour file's `stops`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildStopRef {
    pub tour_id: String,
    pub stop_num: usize,
}

/// A stop as stored on disk, anchored to a repository-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourStop {
    /// Opaque identifier, stable across edits.
    #[serde(default)]
    pub id: String,

    pub title: String,

    /// Long-form description, Markdown or plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// 1-based line number at the time of authoring.
    pub line: u32,

    /// Path relative to the repository root.
    pub rel_path: String,

    /// Logical repository name, keyed into a [`RepoIndex`](crate::RepoIndex).
    pub repository: String,

    #[serde(default)]
    pub child_stops: Vec<ChildStopRef>,
}

impl TourStop {
    /// Creates a stop with a fresh id, no body, and no child stops.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        rel_path: impl Into<String>,
        repository: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            body: None,
            line,
            rel_path: rel_path.into(),
            repository: repository.into(),
            child_stops: Vec::new(),
        }
    }

    /// Applies the fields present in `edit`. Location and child stops are untouched.
    pub fn apply_edit(&mut self, edit: &TourStopEdit) {
        if let Some(title) = &edit.title {
            self.title.clone_from(title);
        }
        if let Some(body) = &edit.body {
            self.body = Some(body.clone());
        }
    }
}

/// A partial update to a stop's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourStopEdit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A stop resolved to a concrete file on this machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbsoluteTourStop {
    /// Absent for stops synthesized during resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Fully resolved file path, in place of `rel_path` and `repository`.
    pub abs_path: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// 1-based line number in `abs_path`.
    pub line: u32,

    /// Short label shown in the tour.
    pub title: String,

    #[serde(default)]
    pub child_stops: Vec<ChildStopRef>,
}

impl AbsoluteTourStop {
    /// The navigation target for this stop.
    #[must_use]
    pub fn pos(&self) -> TourStopPos {
        TourStopPos {
            abs_path: self.abs_path.clone(),
            line: self.line,
        }
    }
}

/// Why a stop could not be located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrokenError {
    FileNotFound,
    LineNotFound,
}

/// A stop that failed resolution. Displayable, not navigable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenTourStop {
    pub id: String,

    /// What went wrong. Presence of this stop type is what marks it broken,
    /// not whether the list is empty.
    pub errors: Vec<BrokenError>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    pub title: String,

    #[serde(default)]
    pub child_stops: Vec<ChildStopRef>,
}

/// A stop after resolution: either located or broken.
///
/// The variant is the only discriminator. A `Broken` stop whose `errors`
/// list happens to be empty is still broken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolvedStop {
    Resolved(AbsoluteTourStop),
    Broken(BrokenTourStop),
}

impl ResolvedStop {
    #[must_use]
    pub fn is_not_broken(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[must_use]
    pub fn as_absolute(&self) -> Option<&AbsoluteTourStop> {
        match self {
            Self::Resolved(stop) => Some(stop),
            Self::Broken(_) => None,
        }
    }

    #[must_use]
    pub fn as_broken(&self) -> Option<&BrokenTourStop> {
        match self {
            Self::Resolved(_) => None,
            Self::Broken(stop) => Some(stop),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Resolved(stop) => &stop.title,
            Self::Broken(stop) => &stop.title,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Resolved(stop) => stop.body.as_deref(),
            Self::Broken(stop) => stop.body.as_deref(),
        }
    }

    #[must_use]
    pub fn child_stops(&self) -> &[ChildStopRef] {
        match self {
            Self::Resolved(stop) => &stop.child_stops,
            Self::Broken(stop) => &stop.child_stops,
        }
    }
}

impl From<AbsoluteTourStop> for ResolvedStop {
    fn from(stop: AbsoluteTourStop) -> Self {
        Self::Resolved(stop)
    }
}

impl From<BrokenTourStop> for ResolvedStop {
    fn from(stop: BrokenTourStop) -> Self {
        Self::Broken(stop)
    }
}

/// Where a navigation action lands: a file and a line in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourStopPos {
    pub abs_path: PathBuf,
    pub line: u32,
}

impl TourStopPos {
    #[must_use]
    pub fn new(abs_path: impl AsRef<Path>, line: u32) -> Self {
        Self {
            abs_path: abs_path.as_ref().to_path_buf(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_absolute() -> AbsoluteTourStop {
        AbsoluteTourStop {
            id: None,
            abs_path: PathBuf::from("/work/core/src/lib.rs"),
            body: Some("Entry point.".into()),
            line: 12,
            title: "Start here".into(),
            child_stops: vec![],
        }
    }

    fn sample_broken(errors: Vec<BrokenError>) -> BrokenTourStop {
        BrokenTourStop {
            id: "stop-1".into(),
            errors,
            body: None,
            title: "Gone".into(),
            child_stops: vec![ChildStopRef {
                tour_id: "other".into(),
                stop_num: 2,
            }],
        }
    }

    #[test]
    fn absolute_stop_is_not_broken() {
        let stop = ResolvedStop::from(sample_absolute());

        assert!(stop.is_not_broken());
        assert_eq!(stop.as_absolute().unwrap().line, 12);
        assert!(stop.as_broken().is_none());
    }

    #[test]
    fn broken_stop_is_broken() {
        let stop = ResolvedStop::from(sample_broken(vec![BrokenError::FileNotFound]));

        assert!(!stop.is_not_broken());
        assert!(stop.as_absolute().is_none());
    }

    #[test]
    fn broken_with_no_errors_is_still_broken() {
        let stop = ResolvedStop::from(sample_broken(vec![]));
        assert!(!stop.is_not_broken());
    }

    #[test]
    fn shared_fields_read_through_either_variant() {
        let ok = ResolvedStop::from(sample_absolute());
        let broken = ResolvedStop::from(sample_broken(vec![BrokenError::LineNotFound]));

        assert_eq!(ok.title(), "Start here");
        assert_eq!(ok.body(), Some("Entry point."));
        assert_eq!(broken.title(), "Gone");
        assert_eq!(broken.body(), None);
        assert_eq!(broken.child_stops()[0].stop_num, 2);
    }

    #[test]
    fn pos_carries_path_and_line() {
        let pos = sample_absolute().pos();
        assert_eq!(pos, TourStopPos::new("/work/core/src/lib.rs", 12));
    }

    #[test]
    fn apply_edit_changes_only_text() {
        let mut stop = TourStop::new("Old", "src/main.rs", "core", 3);
        stop.child_stops.push(ChildStopRef {
            tour_id: "t".into(),
            stop_num: 0,
        });
        let before = stop.clone();

        stop.apply_edit(&TourStopEdit {
            body: Some("New body".into()),
            title: None,
        });

        assert_eq!(stop.title, "Old");
        assert_eq!(stop.body.as_deref(), Some("New body"));
        assert_eq!(stop.line, before.line);
        assert_eq!(stop.rel_path, before.rel_path);
        assert_eq!(stop.child_stops, before.child_stops);

        stop.apply_edit(&TourStopEdit {
            body: None,
            title: Some("New".into()),
        });
        assert_eq!(stop.title, "New");
        assert_eq!(stop.body.as_deref(), Some("New body"));
    }

    #[test]
    fn new_stops_get_distinct_ids() {
        let a = TourStop::new("a", "a.rs", "r", 1);
        let b = TourStop::new("b", "b.rs", "r", 1);
        assert_ne!(a.id, b.id);
        assert!(!a.id.is_empty());
    }

    #[test]
    fn stop_serializes_camel_case_without_absent_body() {
        let stop = TourStop {
            id: "s".into(),
            title: "t".into(),
            body: None,
            line: 5,
            rel_path: "a.ts".into(),
            repository: "r".into(),
            child_stops: vec![ChildStopRef {
                tour_id: "x".into(),
                stop_num: 1,
            }],
        };
        let value = serde_json::to_value(&stop).unwrap();

        assert_eq!(value["relPath"], "a.ts");
        assert_eq!(value["childStops"][0]["tourId"], "x");
        assert_eq!(value["childStops"][0]["stopNum"], 1);
        assert!(value.get("body").is_none());
    }

    #[test]
    fn resolved_stop_is_tagged_by_kind() {
        let ok = ResolvedStop::from(sample_absolute());
        let broken = ResolvedStop::from(sample_broken(vec![]));

        let ok_value = serde_json::to_value(&ok).unwrap();
        let broken_value = serde_json::to_value(&broken).unwrap();
        assert_eq!(ok_value["kind"], "resolved");
        assert_eq!(ok_value["absPath"], "/work/core/src/lib.rs");
        assert_eq!(broken_value["kind"], "broken");
        assert_eq!(broken_value["errors"], serde_json::json!([]));

        assert_eq!(serde_json::from_value::<ResolvedStop>(ok_value).unwrap(), ok);
        let decoded = serde_json::from_value::<ResolvedStop>(broken_value).unwrap();
        assert_eq!(decoded, broken);
        assert!(!decoded.is_not_broken());
    }

    #[test]
    fn broken_errors_use_wire_names() {
        let value = serde_json::to_value(sample_broken(vec![
            BrokenError::FileNotFound,
            BrokenError::LineNotFound,
        ]))
        .unwrap();
        assert_eq!(value["errors"], serde_json::json!(["FileNotFound", "LineNotFound"]));
    }
}
