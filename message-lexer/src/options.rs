use crate::marker::Marker;
use serde::{Deserialize, Serialize};

/// Markers to add to, or replace in, the built-in tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerOverrides {
    /// Merged into the top-level table.
    pub content_markers: Vec<Marker>,
    /// Merged into the table used while reading a flag.
    pub segment_markers: Vec<Marker>,
}

/// Configuration for a [`MessageParser`](crate::MessageParser).
///
/// Deserializes from JSON shaped like
/// `{"markers": {"contentMarkers": [{"start": "<br />", "group": "Newline"}]}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub markers: MarkerOverrides,
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Adds a top-level marker override.
    pub fn content_marker(mut self, marker: Marker) -> Self {
        self.markers.content_markers.push(marker);
        self
    }

    /// Adds a flag segment marker override.
    pub fn segment_marker(mut self, marker: Marker) -> Self {
        self.markers.segment_markers.push(marker);
        self
    }
}
