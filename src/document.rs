//! Tour file documents: JSON in, JSON out.
//!
//! Decoding runs in three stages: parse, structural check, typed decode.
//! Each stage that fails maps to its own error code so callers can tell a
//! corrupt file from a file that is simply not a tour.

use serde_json::Value;

use crate::{
    error::{Result, TouristError, codes},
    model::TourFile,
    validate::valid_tour_file,
};

impl TourFile {
    /// Decodes a tour file from its JSON form.
    ///
    /// Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`codes::MALFORMED_DOCUMENT`] if `json` does not parse, and
    /// [`codes::INVALID_TOUR_FILE`] if it parses but is not a tour file.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| {
            tracing::debug!(error = %e, "tour document is not valid JSON");
            TouristError::new(codes::MALFORMED_DOCUMENT, format!("malformed tour file: {e}"))
        })?;

        if !valid_tour_file(&value) {
            tracing::debug!("tour document failed structural validation");
            return Err(TouristError::new(
                codes::INVALID_TOUR_FILE,
                "invalid tour file: missing or mistyped fields",
            ));
        }

        serde_json::from_value(value).map_err(|e| {
            tracing::debug!(error = %e, "tour document failed typed decoding");
            TouristError::new(codes::INVALID_TOUR_FILE, format!("invalid tour file: {e}"))
        })
    }

    /// Encodes the tour file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`codes::ENCODE_FAILED`] if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TouristError::new(
                codes::ENCODE_FAILED,
                format!("failed to encode tour file: {e}"),
            )
        })
    }
}
