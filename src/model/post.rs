//! Submitted posts.

use serde::{Deserialize, Serialize};

use super::timestamp::{edited, Timestamp};
use super::nullable;

/// A submitted post.
///
/// A post does not own its comments; those live in
/// [`PostAndComments`](crate::threading::PostAndComments).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    /// Short ID
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    /// Full ID (`t3_` followed by the short ID)
    #[serde(
        rename = "name",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub full_id: String,
    /// Creation time
    #[serde(rename = "created_utc", skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Last edit time, `None` if never edited
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "edited")]
    pub edited: Option<Timestamp>,

    /// Path of the post relative to the site root
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub permalink: String,
    /// Link target, or the permalink for self posts
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub url: String,

    /// Title
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub title: String,
    /// Markdown body of a self post
    #[serde(
        rename = "selftext",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub body: String,

    /// Whether you upvoted (`true`) or downvoted (`false`).
    /// `None` if you did neither.
    pub likes: Option<bool>,

    /// Net score
    #[serde(deserialize_with = "nullable")]
    pub score: i64,
    /// Share of upvotes among all votes
    #[serde(deserialize_with = "nullable")]
    pub upvote_ratio: f64,
    /// Number of comments
    #[serde(rename = "num_comments", deserialize_with = "nullable")]
    pub number_of_comments: u64,

    /// Subreddit name without prefix
    #[serde(
        rename = "subreddit",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub subreddit_name: String,
    /// Subreddit name with the `r/` prefix
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub subreddit_name_prefixed: String,
    /// Subreddit full ID
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub subreddit_id: String,

    /// Author username
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub author: String,
    /// Author full ID
    #[serde(
        rename = "author_fullname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub author_id: String,

    /// Whether the post is marked as a spoiler
    #[serde(deserialize_with = "nullable")]
    pub spoiler: bool,
    /// Whether comments are locked
    #[serde(deserialize_with = "nullable")]
    pub locked: bool,
    /// Whether the post is marked NSFW
    #[serde(rename = "over_18", deserialize_with = "nullable")]
    pub nsfw: bool,
    /// Whether this is a text post
    #[serde(rename = "is_self", deserialize_with = "nullable")]
    pub is_self_post: bool,
    /// Whether you saved the post
    #[serde(deserialize_with = "nullable")]
    pub saved: bool,
    /// Whether moderators pinned the post
    #[serde(deserialize_with = "nullable")]
    pub stickied: bool,
}
