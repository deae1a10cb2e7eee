use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_vec};

/// A policy-explainer content item from `GET /stories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub policy_id: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A story plus its long-form explanation from `GET /stories/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryDetail {
    #[serde(flatten)]
    pub story: Story,
    #[serde(default)]
    pub detailed_summary: Option<String>,
}

impl StoryDetail {
    pub fn id(&self) -> &str {
        &self.story.id
    }

    pub fn title(&self) -> &str {
        &self.story.title
    }

    pub fn summary(&self) -> &str {
        &self.story.summary
    }
}

/// Detail text variant requested from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingLevel {
    #[default]
    Standard,
    Simple,
}

impl ReadingLevel {
    /// Query-string value understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Standard => "default",
            ReadingLevel::Simple => "simple",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_decodes_backend_shape() {
        let json = r#"{"id":"1","title":"A","summary":"...","policy_id":"p1","tags":["tax","budget"]}"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.id, "1");
        assert_eq!(story.title, "A");
        assert_eq!(story.policy_id, "p1");
        assert_eq!(story.tags, vec!["tax", "budget"]);
        assert!(story.image_url.is_none());
    }

    #[test]
    fn test_story_detail_flattens_story_fields() {
        let json = r#"{
            "id": "42",
            "title": "Rent rules",
            "summary": "Short",
            "policy_id": "ny_rent",
            "tags": [],
            "image_url": "https://img.example/42.png",
            "detailed_summary": "Long text"
        }"#;
        let detail: StoryDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id(), "42");
        assert_eq!(detail.title(), "Rent rules");
        assert_eq!(detail.summary(), "Short");
        assert_eq!(detail.story.image_url.as_deref(), Some("https://img.example/42.png"));
        assert_eq!(detail.detailed_summary.as_deref(), Some("Long text"));
    }

    #[test]
    fn test_story_detail_without_detailed_summary() {
        let json = r#"{"id":"1","title":"A","summary":"s","policy_id":"p","tags":["x"]}"#;
        let detail: StoryDetail = serde_json::from_str(json).unwrap();
        assert!(detail.detailed_summary.is_none());
    }

    #[test]
    fn test_reading_level_values() {
        assert_eq!(ReadingLevel::Simple.as_str(), "simple");
        assert_eq!(ReadingLevel::Standard.as_str(), "default");
        assert_eq!(ReadingLevel::default(), ReadingLevel::Standard);
    }
}
