//! The reply container owned by every comment.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::listing::Listing;
use crate::model::{Comment, More};

/// Direct replies to a comment.
///
/// Holds the reply comments plus at most one placeholder standing in for
/// replies the API left out.
///
/// On the wire the field is either `""` (no replies) or a nested `Listing`.
/// Encoding is asymmetric: an empty container encodes as `null` and a
/// non-empty one as a bare array of its comments. The placeholder is never
/// encoded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replies {
    /// Reply comments, in response order
    pub comments: Vec<Comment>,
    /// Placeholder for replies not yet loaded
    pub more: Option<More>,
}

impl Replies {
    /// Number of direct reply comments.
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Check if there are no direct reply comments.
    ///
    /// A container can be empty and still carry a placeholder.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Whether the placeholder lists any comment still to be loaded.
    pub fn has_more(&self) -> bool {
        self.more.as_ref().is_some_and(More::has_children)
    }

    /// Remove and return the placeholder.
    ///
    /// Callers take the placeholder before requesting its children, so the
    /// stale placeholder is not left in the tree once the results are merged.
    pub fn take_more(&mut self) -> Option<More> {
        self.more.take()
    }
}

impl From<Listing> for Replies {
    fn from(listing: Listing) -> Self {
        let things = listing.into_things();
        Self {
            comments: things.comments,
            more: things.mores.into_iter().next(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RepliesWire {
    Listing(Listing),
    Sentinel(String),
}

impl<'de> Deserialize<'de> for Replies {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RepliesWire>::deserialize(deserializer)? {
            None => Ok(Replies::default()),
            Some(RepliesWire::Sentinel(s)) if s.is_empty() => Ok(Replies::default()),
            Some(RepliesWire::Sentinel(s)) => Err(de::Error::invalid_value(
                de::Unexpected::Str(&s),
                &"an empty string or a Listing",
            )),
            Some(RepliesWire::Listing(listing)) => Ok(Replies::from(listing)),
        }
    }
}

impl Serialize for Replies {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.comments.is_empty() {
            serializer.serialize_none()
        } else {
            self.comments.serialize(serializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_empty_sentinel() {
        let replies: Replies = serde_json::from_value(json!("")).unwrap();
        assert!(replies.is_empty());
        assert!(replies.more.is_none());
        assert_eq!(serde_json::to_value(&replies).unwrap(), json!(null));
    }

    #[test]
    fn test_decode_null() {
        let replies: Replies = serde_json::from_value(json!(null)).unwrap();
        assert!(replies.is_empty());
    }

    #[test]
    fn test_decode_listing_keeps_first_placeholder() {
        let replies: Replies = serde_json::from_value(json!({
            "kind": "Listing",
            "data": {
                "children": [
                    { "kind": "more", "data": { "name": "t1_m1", "children": ["t1_x"] } },
                    { "kind": "t1", "data": { "name": "t1_a" } },
                    { "kind": "t1", "data": { "name": "t1_b" } },
                    { "kind": "more", "data": { "name": "t1_m2", "children": ["t1_y"] } },
                ],
            },
        }))
        .unwrap();

        let ids: Vec<&str> = replies.comments.iter().map(|c| c.full_id.as_str()).collect();
        assert_eq!(ids, vec!["t1_a", "t1_b"]);
        assert_eq!(replies.more.as_ref().map(|m| m.full_id.as_str()), Some("t1_m1"));
        assert!(replies.has_more());
    }

    #[test]
    fn test_decode_rejects_other_shapes() {
        assert!(serde_json::from_value::<Replies>(json!("x")).is_err());
        assert!(serde_json::from_value::<Replies>(json!(5)).is_err());
        assert!(serde_json::from_value::<Replies>(json!({ "kind": "Listing" })).is_err());
    }

    #[test]
    fn test_decode_rejects_encoded_array() {
        // The encoded form of a non-empty container is not a wire shape
        assert!(serde_json::from_value::<Replies>(json!([{ "name": "t1_b" }])).is_err());
        assert!(serde_json::from_value::<Replies>(json!([{ "name": "t1_b" }, { "name": "t1_c" }])).is_err());
        assert!(serde_json::from_value::<Replies>(json!([{ "children": [] }])).is_err());

        let comment = Comment {
            full_id: "t1_a".to_string(),
            replies: Replies {
                comments: vec![Comment {
                    full_id: "t1_b".to_string(),
                    ..Default::default()
                }],
                more: None,
            },
            ..Default::default()
        };
        let encoded = serde_json::to_value(&comment).unwrap();
        assert!(serde_json::from_value::<Comment>(encoded).is_err());
    }

    #[test]
    fn test_encode_drops_placeholder() {
        let replies = Replies {
            comments: vec![Comment {
                full_id: "t1_a".to_string(),
                ..Default::default()
            }],
            more: Some(More {
                children: vec!["t1_b".to_string()],
                ..Default::default()
            }),
        };

        let encoded = serde_json::to_value(&replies).unwrap();
        assert!(encoded.is_array());
        assert_eq!(encoded.as_array().map(Vec::len), Some(1));
        assert_eq!(encoded[0]["name"], json!("t1_a"));
    }

    #[test]
    fn test_placeholder_without_children() {
        let mut replies = Replies {
            comments: vec![],
            more: Some(More::default()),
        };
        assert!(!replies.has_more());
        assert!(replies.take_more().is_some());
        assert!(replies.more.is_none());
    }
}
