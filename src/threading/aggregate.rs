//! A post together with its comment tree.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::listing::Listing;
use crate::model::{Comment, More, Post};

use super::types::CommentTree;

/// A post and its comments.
///
/// The API returns a post's page as an array of two listings: the first
/// holds the post, the second its top-level comments (each carrying its own
/// replies) and possibly a placeholder for top-level comments left out.
///
/// Encoding writes `{"post": ..., "comments": [...]}` and leaves the
/// top-level placeholder out, like [`Replies`](crate::Replies) does.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostAndComments {
    /// The post
    pub post: Post,
    /// Top-level comments
    pub comments: Vec<Comment>,
    /// Placeholder for top-level comments not yet loaded
    #[serde(skip)]
    pub more: Option<More>,
}

impl PostAndComments {
    /// Build from the two listings of a post page.
    ///
    /// Fails with [`Error::MissingPost`] if the first listing holds no post.
    /// Extra posts in the first listing are ignored.
    pub fn from_listings(post_listing: Listing, comment_listing: Listing) -> Result<Self> {
        let mut posts = post_listing.into_things().posts.into_iter();
        let post = posts.next().ok_or(Error::MissingPost)?;
        let extra = posts.count();
        if extra > 0 {
            debug!(full_id = %post.full_id, extra, "ignoring extra posts in post listing");
        }

        let things = comment_listing.into_things();
        Ok(Self {
            post,
            comments: things.comments,
            more: things.mores.into_iter().next(),
        })
    }

    /// Decode a post page from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Self> {
        let (post_listing, comment_listing): (Listing, Listing) = serde_json::from_slice(data)?;
        Self::from_listings(post_listing, comment_listing)
    }
}

impl<'de> Deserialize<'de> for PostAndComments {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (post_listing, comment_listing) = <(Listing, Listing)>::deserialize(deserializer)?;
        Self::from_listings(post_listing, comment_listing).map_err(de::Error::custom)
    }
}

impl CommentTree for PostAndComments {
    fn full_id(&self) -> &str {
        &self.post.full_id
    }

    fn comments(&self) -> &[Comment] {
        &self.comments
    }

    fn comments_mut(&mut self) -> &mut Vec<Comment> {
        &mut self.comments
    }

    fn more(&self) -> Option<&More> {
        self.more.as_ref()
    }

    fn more_mut(&mut self) -> &mut Option<More> {
        &mut self.more
    }
}
