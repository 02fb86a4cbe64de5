//! Comments, the nodes of a discussion tree.

use serde::{Deserialize, Serialize};

use super::timestamp::{edited, Timestamp};
use super::nullable;
use crate::replies::Replies;

/// A comment posted by a user.
///
/// A comment owns its direct replies. Replies the API left out of a response
/// are represented by the placeholder in [`Replies::more`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Short ID
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub id: String,
    /// Full ID (`t1_` followed by the short ID)
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

    /// Full ID of the parent comment, or of the post for top-level comments
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub parent_id: String,
    /// Path of the comment relative to the site root
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub permalink: String,

    /// Markdown body
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub body: String,
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
    /// Author flair text in this subreddit
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub author_flair_text: String,
    /// Author flair template ID
    #[serde(
        rename = "author_flair_template_id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub author_flair_id: String,

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

    /// Whether you upvoted (`true`) or downvoted (`false`).
    /// `None` if you did neither.
    pub likes: Option<bool>,

    /// Net score
    #[serde(deserialize_with = "nullable")]
    pub score: i64,
    /// Controversiality flag (0 or 1)
    #[serde(deserialize_with = "nullable")]
    pub controversiality: i64,

    /// Full ID of the post the comment belongs to
    #[serde(
        rename = "link_id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub post_id: String,
    // The post fields below only appear on some endpoints.
    /// Title of the post
    #[serde(
        rename = "link_title",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub post_title: String,
    /// Permalink of the post
    #[serde(
        rename = "link_permalink",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub post_permalink: String,
    /// Author of the post
    #[serde(
        rename = "link_author",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "nullable"
    )]
    pub post_author: String,
    /// Number of comments on the post
    #[serde(rename = "num_comments", skip_serializing_if = "Option::is_none")]
    pub post_num_comments: Option<u64>,

    /// Whether the author is also the author of the post
    #[serde(deserialize_with = "nullable")]
    pub is_submitter: bool,
    /// Whether the score is still hidden
    #[serde(deserialize_with = "nullable")]
    pub score_hidden: bool,
    /// Whether you saved the comment
    #[serde(deserialize_with = "nullable")]
    pub saved: bool,
    /// Whether moderators pinned the comment
    #[serde(deserialize_with = "nullable")]
    pub stickied: bool,
    /// Whether replies are locked
    #[serde(deserialize_with = "nullable")]
    pub locked: bool,
    /// Whether the comment can receive awards
    #[serde(deserialize_with = "nullable")]
    pub can_gild: bool,
    /// Whether the comment is marked NSFW
    #[serde(rename = "over_18", deserialize_with = "nullable")]
    pub nsfw: bool,

    /// Direct replies and the placeholder for replies not yet loaded
    pub replies: Replies,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threading::CommentTree;
    use serde_json::json;

    #[test]
    fn test_decode_comment_without_replies() {
        let comment: Comment = serde_json::from_value(json!({
            "id": "k1",
            "name": "t1_k1",
            "parent_id": "t3_abc",
            "link_id": "t3_abc",
            "body": "first",
            "author": "alice",
            "author_flair_text": null,
            "created_utc": 1700000000.0,
            "edited": false,
            "likes": null,
            "score": 12,
            "over_18": true,
            "replies": "",
        }))
        .unwrap();

        assert_eq!(comment.full_id, "t1_k1");
        assert_eq!(comment.parent_id, "t3_abc");
        assert_eq!(comment.post_id, "t3_abc");
        assert_eq!(comment.author_flair_text, "");
        assert_eq!(comment.score, 12);
        assert!(comment.nsfw);
        assert!(comment.created.is_some());
        assert!(comment.edited.is_none());
        assert!(comment.replies.is_empty());
        assert!(!comment.has_more());
    }

    #[test]
    fn test_likes_is_tri_state() {
        let up: Comment = serde_json::from_value(json!({ "likes": true })).unwrap();
        let down: Comment = serde_json::from_value(json!({ "likes": false })).unwrap();
        let neither: Comment = serde_json::from_value(json!({ "likes": null })).unwrap();

        assert_eq!(up.likes, Some(true));
        assert_eq!(down.likes, Some(false));
        assert_eq!(neither.likes, None);

        // null stays null on the way out
        let encoded = serde_json::to_value(&neither).unwrap();
        assert_eq!(encoded["likes"], json!(null));
        let encoded = serde_json::to_value(&down).unwrap();
        assert_eq!(encoded["likes"], json!(false));
    }

    #[test]
    fn test_decode_nested_replies() {
        let comment: Comment = serde_json::from_value(json!({
            "name": "t1_k1",
            "replies": {
                "kind": "Listing",
                "data": {
                    "children": [
                        { "kind": "t1", "data": { "name": "t1_k2", "parent_id": "t1_k1", "replies": "" } },
                        { "kind": "more", "data": { "name": "t1_k9", "parent_id": "t1_k1", "count": 3, "children": ["t1_k9", "t1_k10"] } },
                    ],
                    "after": null,
                    "before": null,
                },
            },
        }))
        .unwrap();

        assert_eq!(comment.replies.comments.len(), 1);
        assert_eq!(comment.replies.comments[0].full_id, "t1_k2");
        assert!(comment.has_more());
        assert_eq!(
            comment.replies.more.as_ref().map(|m| m.children.len()),
            Some(2)
        );
    }

    #[test]
    fn test_encode_omits_empty_strings() {
        let comment = Comment {
            full_id: "t1_k1".to_string(),
            body: "hi".to_string(),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&comment).unwrap();

        assert_eq!(encoded["name"], json!("t1_k1"));
        assert_eq!(encoded["body"], json!("hi"));
        assert!(encoded.get("author").is_none());
        assert!(encoded.get("created_utc").is_none());
        assert_eq!(encoded["replies"], json!(null));
    }

    #[test]
    fn test_decode_rejects_wrong_types() {
        assert!(serde_json::from_value::<Comment>(json!({ "score": "lots" })).is_err());
        assert!(serde_json::from_value::<Comment>(json!({ "replies": "not empty" })).is_err());
    }
}
