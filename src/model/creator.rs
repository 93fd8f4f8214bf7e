//! Creator profiles

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::CreatorId;

/// What a creator publishes about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fitness,
    Lifestyle,
    Art,
    Music,
    Gaming,
    Cooking,
    Fashion,
    Photography,
    Education,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Fitness,
        Category::Lifestyle,
        Category::Art,
        Category::Music,
        Category::Gaming,
        Category::Cooking,
        Category::Fashion,
        Category::Photography,
        Category::Education,
        Category::Entertainment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fitness => "fitness",
            Category::Lifestyle => "lifestyle",
            Category::Art => "art",
            Category::Music => "music",
            Category::Gaming => "gaming",
            Category::Cooking => "cooking",
            Category::Fashion => "fashion",
            Category::Photography => "photography",
            Category::Education => "education",
            Category::Entertainment => "entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content creator on the platform
///
/// The engine holds the authoritative copy; every emitted value is a
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub is_verified: bool,
    pub subscriber_count: u64,
    pub monthly_price: f64,
    pub created_at: DateTime<Utc>,
    pub is_online: bool,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
}
