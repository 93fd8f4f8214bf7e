//! Content posts

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::{ContentId, CreatorId};

/// Media format of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Image,
    Video,
    Text,
    Live,
    Gallery,
}

impl ContentKind {
    pub const ALL: [ContentKind; 5] = [
        ContentKind::Image,
        ContentKind::Video,
        ContentKind::Text,
        ContentKind::Live,
        ContentKind::Gallery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::Text => "text",
            ContentKind::Live => "live",
            ContentKind::Gallery => "gallery",
        }
    }

    /// File extension of the attached media, `None` when the kind carries no media
    pub fn media_extension(&self) -> Option<&'static str> {
        match self {
            ContentKind::Image | ContentKind::Gallery => Some("jpg"),
            ContentKind::Video | ContentKind::Live => Some("mp4"),
            ContentKind::Text => None,
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_free(price: &f64) -> bool {
    *price == 0.0
}

/// A post authored by a creator. Never revised once emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub id: ContentId,
    pub creator_id: CreatorId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "content_type")]
    pub kind: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    /// Zero unless the post is locked
    #[serde(default, skip_serializing_if = "is_free")]
    pub price: f64,
    pub is_locked: bool,
    pub view_count: u64,
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<String>,
}
