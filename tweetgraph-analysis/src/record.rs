//! Post record schema
//!
//! Every field is optional: partial records deserialize cleanly and each
//! analysis step decides for itself whether a record applies. Fields the
//! analysis never reads are kept in `extra` so that a load/save round trip
//! does not lose data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single ingested post with its metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Entities>,

    /// Present iff the record is a retweet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweeted_status: Option<Box<Record>>,

    /// Present iff the record quotes another post
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quoted_status: Option<Box<Record>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_quote_status: Option<bool>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<Vec<Hashtag>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_mentions: Option<Vec<UserMention>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMention {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Author handle (`user.screen_name`)
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref()?.screen_name.as_deref()
    }

    /// Hashtag texts in record order, or `None` when `entities.hashtags` is absent
    pub fn hashtag_texts(&self) -> Option<Vec<&str>> {
        let hashtags = self.entities.as_ref()?.hashtags.as_ref()?;
        Some(hashtags.iter().filter_map(|h| h.text.as_deref()).collect())
    }

    /// Mentioned handles in record order (empty when absent)
    pub fn mentioned_handles(&self) -> Vec<&str> {
        self.entities
            .as_ref()
            .and_then(|e| e.user_mentions.as_ref())
            .map(|mentions| {
                mentions
                    .iter()
                    .filter_map(|m| m.screen_name.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Author of the retweeted post
    pub fn retweeted_author(&self) -> Option<&str> {
        self.retweeted_status.as_ref()?.author()
    }

    /// Author of the quoted post
    pub fn quoted_author(&self) -> Option<&str> {
        self.quoted_status.as_ref()?.author()
    }

    pub fn is_retweet(&self) -> bool {
        self.retweeted_status.is_some()
    }

    /// `is_quote_status` when the field is present
    pub fn is_quote(&self) -> Option<bool> {
        self.is_quote_status
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_record_deserializes() {
        let record: Record = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(record.id, Some(7));
        assert!(record.author().is_none());
        assert!(record.hashtag_texts().is_none());
        assert!(record.mentioned_handles().is_empty());
        assert!(!record.is_retweet());
    }

    #[test]
    fn test_nested_fields() {
        let json = r#"{
            "id": 1,
            "text": "RT hello",
            "user": {"screen_name": "alice", "followers_count": 12},
            "retweeted_status": {"user": {"screen_name": "bob"}},
            "entities": {"hashtags": [{"text": "rust", "indices": [0, 5]}], "user_mentions": []},
            "is_quote_status": false,
            "lang": "en"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.author(), Some("alice"));
        assert_eq!(record.retweeted_author(), Some("bob"));
        assert_eq!(record.hashtag_texts(), Some(vec!["rust"]));
        assert_eq!(record.is_quote(), Some(false));
        assert_eq!(record.extra.get("lang"), Some(&Value::from("en")));
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        let json = r#"{"id":3,"user":{"screen_name":"carol","verified":true},"entities":{"urls":[]},"favorite_count":4}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        let back: Value = serde_json::to_value(&record).unwrap();
        let original: Value = serde_json::from_str(json).unwrap();
        assert_eq!(back, original);
    }
}
