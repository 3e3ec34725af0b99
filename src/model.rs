//! Core data models for the proposal widget.
//! Plain values shared by the placement logic, the state machine and the views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Viewport-pixel coordinates of the evasive control's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

/// Width/height pair, used for both the viewport and the measured control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewState {
    /// The question with its three choices.
    Proposal,
    /// "Maybe later" acknowledgement; always returns to `Proposal`.
    Declined,
    /// Terminal celebration screen.
    Success,
}

/// How a response is classified when handed to a `ResponseLogger`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "YES")]
    Accept,
    #[serde(rename = "NO")]
    Decline,
    #[serde(rename = "MAYBE")]
    Defer,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Accept => "YES",
            Classification::Decline => "NO",
            Classification::Defer => "MAYBE",
        }
    }

    pub fn is_accept(self) -> bool {
        matches!(self, Classification::Accept)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of initializing a response client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    /// No datastore configured; responses are only written to the console.
    LocalOnly,
    Failed(String),
}

impl ConnectionStatus {
    /// Whether the proposal may be shown. Only `Failed` blocks it.
    pub fn is_ready(&self) -> bool {
        !matches!(self, ConnectionStatus::Failed(_))
    }
}

/// Payload pushed to the remote datastore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub response_type: Classification,
    /// Kept alongside `response_type` for readers of the older boolean-only shape.
    pub accepted: bool,
    /// Exact evasion counter value at submit time.
    pub evasive_maneuvers: u32,
    /// ISO-8601 timestamp.
    pub timestamp: String,
    pub user_agent: String,
}

impl ResponseRecord {
    pub fn new(
        classification: Classification,
        evasion_count: u32,
        timestamp: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            response_type: classification,
            accepted: classification.is_accept(),
            evasive_maneuvers: evasion_count,
            timestamp: timestamp.into(),
            user_agent: user_agent.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_wire_names() {
        let rec = ResponseRecord::new(Classification::Defer, 7, "2026-02-14T12:00:00.000Z", "test-agent");
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["responseType"], "MAYBE");
        assert_eq!(json["accepted"], false);
        assert_eq!(json["evasiveManeuvers"], 7);
        assert_eq!(json["timestamp"], "2026-02-14T12:00:00.000Z");
        assert_eq!(json["userAgent"], "test-agent");
    }

    #[test]
    fn accepted_flag_tracks_classification() {
        assert!(ResponseRecord::new(Classification::Accept, 0, "", "").accepted);
        assert!(!ResponseRecord::new(Classification::Decline, 0, "", "").accepted);
    }

    #[test]
    fn only_failed_status_blocks() {
        assert!(ConnectionStatus::Connected.is_ready());
        assert!(ConnectionStatus::LocalOnly.is_ready());
        assert!(!ConnectionStatus::Failed("offline".into()).is_ready());
    }
}
