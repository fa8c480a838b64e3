//! Frontend Models
//!
//! Data structures mirroring backend API payloads.

use serde::{Deserialize, Serialize};

/// Department standing (matches backend)
///
/// `rank` and `total_points` are computed server-side; the client
/// never mutates them directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: u32,
    pub name: String,
    pub rank: u32,
    pub total_points: i64,
}

/// Declared event result (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventResult {
    pub id: u32,
    pub event_name: String,
    /// mens, womens, team or individual; unknown values pass through
    pub event_type: String,
    pub department_id: u32,
    pub department_name: String,
    pub position: u32,
    pub points_awarded: i64,
}

/// Uploaded gallery image (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u32,
    /// winner or event
    pub media_type: String,
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    /// Absolute URL, or a path relative to the static-asset prefix
    pub image_path: String,
}

/// Scheduled event entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: u32,
    pub event_name: String,
    pub event_type: String,
    pub date: String,
    pub time: String,
    pub venue: String,
}
