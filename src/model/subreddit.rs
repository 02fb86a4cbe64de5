//! Subreddit metadata.

use serde::{Deserialize, Serialize};

use super::nullable;
use super::timestamp::Timestamp;

/// Information about a subreddit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subreddit {
    /// Short ID
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    /// Full ID (`t5_` followed by the short ID)
    #[serde(
        rename = "name",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub full_id: String,
    /// Creation time
    #[serde(rename = "created_utc", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    /// Path of the subreddit relative to the site root
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub url: String,
    /// Name without prefix
    #[serde(
        rename = "display_name",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub name: String,
    /// Name with the `r/` prefix
    #[serde(
        rename = "display_name_prefixed",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub name_prefixed: String,
    /// Title
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub title: String,
    /// Short public description
    #[serde(
        rename = "public_description",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub description: String,
    /// `public`, `private`, `restricted`, ...
    #[serde(
        rename = "subreddit_type",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub kind: String,
    /// Default comment sort, if the moderators set one
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub suggested_comment_sort: String,

    /// Subscriber count
    #[serde(deserialize_with = "nullable")]
    pub subscribers: u64,
    /// Users currently online, when the API reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_user_count: Option<u64>,
    /// Whether the subreddit is marked NSFW
    #[serde(rename = "over18", deserialize_with = "nullable")]
    pub nsfw: bool,
    // The user_* flags are null when the request is not authenticated.
    /// Whether you moderate it
    #[serde(rename = "user_is_moderator", deserialize_with = "nullable")]
    pub user_is_mod: bool,
    /// Whether you subscribe to it
    #[serde(rename = "user_is_subscriber", deserialize_with = "nullable")]
    pub subscribed: bool,
    /// Whether it is in your favorites
    #[serde(rename = "user_has_favorited", deserialize_with = "nullable")]
    pub favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_logged_out_subreddit() {
        let subreddit: Subreddit = serde_json::from_value(json!({
            "id": "2qh1i",
            "name": "t5_2qh1i",
            "display_name": "rust",
            "display_name_prefixed": "r/rust",
            "subscribers": 300000,
            "active_user_count": null,
            "user_is_moderator": null,
            "user_is_subscriber": null,
            "user_has_favorited": null,
            "over18": false,
        }))
        .unwrap();

        assert_eq!(subreddit.name, "rust");
        assert_eq!(subreddit.subscribers, 300000);
        assert_eq!(subreddit.active_user_count, None);
        assert!(!subreddit.user_is_mod);
        assert!(!subreddit.subscribed);
    }
}
