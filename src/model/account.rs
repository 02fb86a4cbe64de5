//! User accounts.

use serde::{Deserialize, Serialize};

use super::nullable;
use super::timestamp::Timestamp;

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    /// Short ID
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    /// Username
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub name: String,
    /// Creation time
    #[serde(rename = "created_utc", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,

    /// Karma earned from posts
    #[serde(rename = "link_karma", deserialize_with = "nullable")]
    pub post_karma: i64,
    /// Karma earned from comments
    #[serde(deserialize_with = "nullable")]
    pub comment_karma: i64,

    /// Whether the account is on your friends list
    #[serde(deserialize_with = "nullable")]
    pub is_friend: bool,
    /// Whether the account belongs to a site employee
    #[serde(deserialize_with = "nullable")]
    pub is_employee: bool,
    /// Whether the account has a verified email address
    #[serde(deserialize_with = "nullable")]
    pub has_verified_email: bool,
    /// Whether the account is suspended
    #[serde(deserialize_with = "nullable")]
    pub is_suspended: bool,
}

impl Account {
    /// Full ID (`t2_` followed by the short ID), empty if the ID is unknown.
    pub fn full_id(&self) -> String {
        if self.id.is_empty() {
            String::new()
        } else {
            format!("t2_{}", self.id)
        }
    }
}
