//! Moderation log entries.

use serde::{Deserialize, Serialize};

use super::nullable;
use super::timestamp::Timestamp;

/// An action a moderator took, as recorded in the moderation log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModAction {
    /// Log entry ID
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    /// Action name (`removecomment`, `approvelink`, ...)
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub action: String,
    /// When the action was taken
    #[serde(rename = "created_utc", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    /// Moderator username
    #[serde(
        rename = "mod",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub moderator: String,
    /// Moderator short ID
    #[serde(
        rename = "mod_id36",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub moderator_id: String,

    /// Author of the affected thing
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub target_author: String,
    /// Full ID of the affected thing
    #[serde(
        rename = "target_fullname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub target_id: String,
    /// Title of the affected post
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub target_title: String,
    /// Permalink of the affected thing
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub target_permalink: String,
    /// Body of the affected thing
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub target_body: String,

    /// Subreddit name
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub subreddit: String,
    /// Subreddit short ID
    #[serde(
        rename = "sr_id36",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub subreddit_id: String,

    /// Extra detail about the action
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub details: String,
    /// Free-form description
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub description: String,
}
