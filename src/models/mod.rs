//! Data records exchanged with the CivicCompanion backend.
//!
//! Everything here is decoded from (or encoded to) JSON and treated as
//! immutable once received; a new fetch replaces the old value wholesale.

mod chat;
mod policy;
mod request;
mod short;
mod story;
mod text_utils;

pub use chat::{ChatMessage, ChatResponse, Sender, Source};
pub use policy::{ExplainPolicyResponse, HealthStatus, TakeActionResponse};
pub use request::{
    ChatParams, ChatRequest, ExplainPolicyParams, ExplainPolicyRequest, TakeActionParams,
    TakeActionRequest, DEFAULT_LANGUAGE, DEFAULT_USER_ROLE,
};
pub use short::ShortVideo;
pub use story::{ReadingLevel, Story, StoryDetail};
pub use text_utils::first_paragraph;

use serde::{Deserialize, Deserializer};

/// Deserialize an id given as either a JSON string or an integer.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Deserialize a list that may be missing or `null` as an empty vector.
pub(crate) fn deserialize_nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_nullable_vec")]
        tags: Vec<String>,
    }

    #[test]
    fn test_id_from_string_or_integer() {
        let from_str: Probe = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        let from_int: Probe = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(from_str.id, "7");
        assert_eq!(from_int.id, "7");
    }

    #[test]
    fn test_nullable_vec() {
        let missing: Probe = serde_json::from_str(r#"{"id":"1"}"#).unwrap();
        let null: Probe = serde_json::from_str(r#"{"id":"1","tags":null}"#).unwrap();
        let present: Probe = serde_json::from_str(r#"{"id":"1","tags":["tax"]}"#).unwrap();
        assert!(missing.tags.is_empty());
        assert!(null.tags.is_empty());
        assert_eq!(present.tags, vec!["tax"]);
    }
}
