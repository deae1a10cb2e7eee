use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Headline shown for a short without a description.
const DEFAULT_SHORT_HEADLINE: &str = "CivicCompanion short";

/// A short-form vertical video from `GET /shorts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortVideo {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl ShortVideo {
    pub fn headline(&self) -> &str {
        match self.description.as_deref() {
            Some(description) if !description.trim().is_empty() => description,
            _ => DEFAULT_SHORT_HEADLINE,
        }
    }
}
