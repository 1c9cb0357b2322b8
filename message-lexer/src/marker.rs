use crate::error::MarkerError;
use serde::{Deserialize, Serialize};

/// The lexical category a marker introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerGroup {
    /// A fenced code block, kept verbatim including its fences.
    Code,
    /// A quoted string.
    String,
    /// Separates arguments, produces nothing.
    Whitespace,
    /// Separates arguments and starts a new line.
    Newline,
    /// Starts a flag that may carry an assigned value (`--name=value`).
    FlagStart,
    /// Starts a flag that can only be present or negated (`-name`).
    BoolFlagStart,
    /// Negates a flag when it directly follows the flag start (`--!name`).
    FlagNegator,
    /// Separates a flag name from its value.
    FlagAssignment,
}

impl MarkerGroup {
    /// Number of groups.
    pub const COUNT: usize = 8;

    /// Every group, in declaration order.
    pub const ALL: [MarkerGroup; Self::COUNT] = [
        MarkerGroup::Code,
        MarkerGroup::String,
        MarkerGroup::Whitespace,
        MarkerGroup::Newline,
        MarkerGroup::FlagStart,
        MarkerGroup::BoolFlagStart,
        MarkerGroup::FlagNegator,
        MarkerGroup::FlagAssignment,
    ];

    fn slot(self) -> usize {
        self as usize
    }
}

/// Describes how to recognize one lexical category.
///
/// `start` must match literally at the cursor. Delimited groups (`Code`,
/// `String`) close on `end`, or on `start` again when `end` is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub start: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    pub group: MarkerGroup,
}

impl Marker {
    /// Creates a symmetric marker.
    pub fn new(start: impl Into<String>, group: MarkerGroup) -> Self {
        Self {
            start: start.into(),
            end: None,
            group,
        }
    }

    /// Creates a marker with a distinct closing sequence.
    pub fn delimited(start: impl Into<String>, end: impl Into<String>, group: MarkerGroup) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
            group,
        }
    }

    /// The closing sequence.
    pub fn end(&self) -> &str {
        self.end.as_deref().unwrap_or(&self.start)
    }

    fn validate(&self) -> Result<(), MarkerError> {
        if self.start.is_empty() {
            return Err(MarkerError::EmptyStart { group: self.group });
        }
        if self.end.as_deref() == Some("") {
            return Err(MarkerError::EmptyEnd {
                start: self.start.clone(),
            });
        }
        Ok(())
    }
}

/// Markers recognized at the top level of a message, in priority order.
///
/// Order matters where one start is a prefix of another: the code fence is
/// tried before the backtick string, `--` before `-`.
pub fn default_content_markers() -> Vec<Marker> {
    vec![
        Marker::new("```", MarkerGroup::Code),
        Marker::new("`", MarkerGroup::String),
        Marker::new("\"", MarkerGroup::String),
        Marker::new("'", MarkerGroup::String),
        Marker::delimited("“", "”", MarkerGroup::String),
        Marker::new(" ", MarkerGroup::Whitespace),
        Marker::new("\t", MarkerGroup::Whitespace),
        Marker::new("\n", MarkerGroup::Newline),
        Marker::new("--", MarkerGroup::FlagStart),
        Marker::new("—", MarkerGroup::FlagStart),
        Marker::new("-", MarkerGroup::BoolFlagStart),
    ]
}

/// Markers recognized only while reading a flag.
pub fn default_segment_markers() -> Vec<Marker> {
    vec![
        Marker::new("!", MarkerGroup::FlagNegator),
        Marker::new(":", MarkerGroup::FlagAssignment),
        Marker::new("=", MarkerGroup::FlagAssignment),
    ]
}

/// An ordered, immutable list of markers with unique starts, indexed by group.
#[derive(Debug, Clone)]
pub struct MarkerTable {
    markers: Vec<Marker>,
    groups: [Vec<usize>; MarkerGroup::COUNT],
}

impl MarkerTable {
    /// Merges `overrides` into `defaults`.
    ///
    /// An override replaces the marker with the same `start` in place;
    /// otherwise it is appended. Later overrides win over earlier ones.
    pub fn merge(defaults: Vec<Marker>, overrides: &[Marker]) -> Result<Self, MarkerError> {
        let mut markers: Vec<Marker> = Vec::with_capacity(defaults.len() + overrides.len());
        for marker in defaults.into_iter().chain(overrides.iter().cloned()) {
            marker.validate()?;
            match markers.iter().position(|m| m.start == marker.start) {
                Some(existing) => markers[existing] = marker,
                None => markers.push(marker),
            }
        }
        Ok(Self::build(markers))
    }

    fn build(markers: Vec<Marker>) -> Self {
        let mut groups: [Vec<usize>; MarkerGroup::COUNT] = Default::default();
        for (i, marker) in markers.iter().enumerate() {
            groups[marker.group.slot()].push(i);
        }
        Self { markers, groups }
    }

    /// All markers, in priority order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Markers of one group, in priority order.
    pub fn group(&self, group: MarkerGroup) -> impl Iterator<Item = &Marker> + '_ {
        self.groups[group.slot()].iter().map(move |&i| &self.markers[i])
    }

    /// Looks a marker up by its start sequence.
    pub fn get(&self, start: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.start == start)
    }
}

/// The content and segment tables a parser scans with.
#[derive(Debug, Clone)]
pub struct Markers {
    content: MarkerTable,
    segment: MarkerTable,
}

impl Markers {
    /// Builds both tables from the defaults plus the given overrides.
    pub fn with_overrides(content: &[Marker], segment: &[Marker]) -> Result<Self, MarkerError> {
        Ok(Self {
            content: MarkerTable::merge(default_content_markers(), content)?,
            segment: MarkerTable::merge(default_segment_markers(), segment)?,
        })
    }

    pub fn content(&self) -> &MarkerTable {
        &self.content
    }

    pub fn segment(&self) -> &MarkerTable {
        &self.segment
    }

    /// Markers of `group` from both tables, content markers first.
    pub fn in_group(&self, group: MarkerGroup) -> impl Iterator<Item = &Marker> + '_ {
        self.content.group(group).chain(self.segment.group(group))
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            content: MarkerTable::build(default_content_markers()),
            segment: MarkerTable::build(default_segment_markers()),
        }
    }
}
