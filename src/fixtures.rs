//! Wire fixtures for testing.
//!
//! Builders for the JSON bodies the API sends, so tests can describe a
//! response by its things instead of spelling out nested envelopes.

use serde_json::{json, Value};

use crate::decoder::Decoder;
use crate::error::Result;
use crate::kind::Kind;
use crate::response::Response;

/// A `t1` envelope with the given full ID and parent.
///
/// The short ID is the full ID without its `t1_` prefix.
pub fn comment(full_id: &str, parent_id: &str) -> Value {
    json!({
        "kind": Kind::Comment.as_str(),
        "data": {
            "id": short_id(full_id),
            "name": full_id,
            "parent_id": parent_id,
            "body": format!("comment {full_id}"),
            "replies": "",
        },
    })
}

/// A `more` envelope listing the full IDs of the comments it stands for.
pub fn more(full_id: &str, parent_id: &str, children: &[&str]) -> Value {
    json!({
        "kind": Kind::More.as_str(),
        "data": {
            "id": short_id(full_id),
            "name": full_id,
            "parent_id": parent_id,
            "count": children.len(),
            "children": children,
        },
    })
}

/// A `t3` envelope with the given full ID.
pub fn post(full_id: &str) -> Value {
    json!({
        "kind": Kind::Post.as_str(),
        "data": {
            "id": short_id(full_id),
            "name": full_id,
            "title": format!("post {full_id}"),
            "num_comments": 0,
        },
    })
}

/// An envelope with an arbitrary kind and payload.
pub fn raw(kind: &str, data: Value) -> Value {
    json!({ "kind": kind, "data": data })
}

/// Builder for a `Listing` body.
///
/// # Example
///
/// ```
/// use listing_rs::fixtures::{self, ListingFixture};
/// use listing_rs::Listing;
///
/// let body = ListingFixture::new()
///     .child(fixtures::comment("t1_a", "t3_p"))
///     .after("t1_a")
///     .to_bytes();
///
/// let listing: Listing = serde_json::from_slice(&body).unwrap();
/// assert_eq!(listing.things.comments.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListingFixture {
    children: Vec<Value>,
    after: Option<String>,
    before: Option<String>,
}

impl ListingFixture {
    /// Create an empty listing with no anchors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an envelope.
    pub fn child(mut self, envelope: Value) -> Self {
        self.children.push(envelope);
        self
    }

    /// Append a comment (see [`comment`]).
    pub fn comment(self, full_id: &str, parent_id: &str) -> Self {
        self.child(comment(full_id, parent_id))
    }

    /// Append a placeholder (see [`more`]).
    pub fn more(self, full_id: &str, parent_id: &str, children: &[&str]) -> Self {
        self.child(more(full_id, parent_id, children))
    }

    /// Append a post (see [`post`]).
    pub fn post(self, full_id: &str) -> Self {
        self.child(post(full_id))
    }

    /// Set the next-page anchor.
    pub fn after(mut self, anchor: &str) -> Self {
        self.after = Some(anchor.to_string());
        self
    }

    /// Set the previous-page anchor.
    pub fn before(mut self, anchor: &str) -> Self {
        self.before = Some(anchor.to_string());
        self
    }

    /// Build the listing body. Unset anchors are `null`, as the API sends them.
    pub fn to_value(&self) -> Value {
        json!({
            "kind": Kind::Listing.as_str(),
            "data": {
                "children": self.children,
                "after": self.after,
                "before": self.before,
            },
        })
    }

    /// Build the listing body as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_value().to_string().into_bytes()
    }
}

/// A post page body: the post listing followed by the comment listing.
pub fn post_and_comments(post_listing: &ListingFixture, comment_listing: &ListingFixture) -> Value {
    json!([post_listing.to_value(), comment_listing.to_value()])
}

/// A more-children body carrying `things` and no errors.
pub fn more_children(things: Vec<Value>) -> Value {
    json!({ "json": { "errors": [], "data": { "things": things } } })
}

/// Feed `data` to a fresh [`Decoder`] in chunks of `chunk_size` bytes,
/// collecting every response that completes along the way.
///
/// Simulates a transport that delivers a body in arbitrary pieces.
pub fn decode_in_chunks(data: &[u8], chunk_size: usize) -> Result<Vec<Response>> {
    let mut decoder = Decoder::new();
    let mut responses = Vec::new();

    for chunk in data.chunks(chunk_size.max(1)) {
        decoder.feed_bytes(chunk);
        while let Some(response) = decoder.decode_response()? {
            responses.push(response);
        }
    }

    Ok(responses)
}

fn short_id(full_id: &str) -> &str {
    full_id
        .split_once('_')
        .map_or(full_id, |(_, id)| id)
}
