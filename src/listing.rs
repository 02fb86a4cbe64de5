//! Classified collections of things and paginated listings.

use serde::de::Deserializer;
use serde::ser::{Error as _, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::kind::Kind;
use crate::model::{nullable, object, Account, Comment, ModAction, More, Post, Subreddit};
use crate::thing::{Envelope, Thing};

/// Things of a response, bucketed by kind.
///
/// Every bucket keeps the relative order in which its things appeared.
/// Envelopes with an unsupported kind, or whose payload failed to decode,
/// are not kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Things {
    /// `t1` things
    pub comments: Vec<Comment>,
    /// `more` things
    pub mores: Vec<More>,
    /// `t2` things
    pub accounts: Vec<Account>,
    /// `t3` things
    pub posts: Vec<Post>,
    /// `t5` things
    pub subreddits: Vec<Subreddit>,
    /// `modaction` things
    pub mod_actions: Vec<ModAction>,
}

impl Things {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode and bucket a sequence of envelopes.
    ///
    /// This never fails: an envelope that does not decode is skipped.
    pub fn classify(envelopes: impl IntoIterator<Item = Envelope>) -> Self {
        let mut things = Self::new();
        for envelope in envelopes {
            match envelope.decode() {
                Ok(thing) => {
                    things.push(thing);
                }
                Err(err) => {
                    debug!(error = %err, "skipping envelope");
                }
            }
        }
        things
    }

    /// Append a thing to its bucket.
    ///
    /// Returns `false` if the thing is unsupported and was not kept.
    pub fn push(&mut self, thing: Thing) -> bool {
        match thing {
            Thing::Comment(c) => self.comments.push(*c),
            Thing::More(m) => self.mores.push(m),
            Thing::Account(a) => self.accounts.push(a),
            Thing::Post(p) => self.posts.push(*p),
            Thing::Subreddit(s) => self.subreddits.push(s),
            Thing::ModAction(m) => self.mod_actions.push(m),
            Thing::Unsupported { kind, .. } => {
                debug!(%kind, "skipping unsupported kind");
                return false;
            }
        }
        true
    }

    /// Total number of things across all buckets.
    pub fn len(&self) -> usize {
        self.comments.len()
            + self.mores.len()
            + self.accounts.len()
            + self.posts.len()
            + self.subreddits.len()
            + self.mod_actions.len()
    }

    /// Check if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for Things {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let envelopes: Vec<Envelope> = nullable(deserializer)?;
        Ok(Things::classify(envelopes))
    }
}

/// Pagination anchors of a page of results.
///
/// An empty anchor means there is no page in that direction.
pub trait Anchor {
    /// Anchor for the next page.
    fn after(&self) -> &str;

    /// Anchor for the previous page.
    fn before(&self) -> &str;

    /// Check if a next page exists.
    fn has_after(&self) -> bool {
        !self.after().is_empty()
    }

    /// Check if a previous page exists.
    fn has_before(&self) -> bool {
        !self.before().is_empty()
    }
}

/// A page of things with its pagination anchors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    /// The page's things, classified by kind
    pub things: Things,
    /// Anchor for the next page, empty if none
    pub after: String,
    /// Anchor for the previous page, empty if none
    pub before: String,
}

impl Listing {
    /// Take the things out of the listing, dropping the anchors.
    pub fn into_things(self) -> Things {
        self.things
    }
}

impl Anchor for Listing {
    fn after(&self) -> &str {
        &self.after
    }

    fn before(&self) -> &str {
        &self.before
    }
}

#[derive(Deserialize)]
struct ListingWire {
    #[serde(deserialize_with = "object")]
    data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Things,
    #[serde(default, deserialize_with = "nullable")]
    after: String,
    #[serde(default, deserialize_with = "nullable")]
    before: String,
}

impl<'de> Deserialize<'de> for Listing {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire: ListingWire = object(deserializer)?;
        Ok(Listing {
            things: wire.data.children,
            after: wire.data.after,
            before: wire.data.before,
        })
    }
}

/// Encodes with the `Listing` envelope shape. Only typed records are written;
/// unsupported things were already dropped during decode.
impl Serialize for Listing {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let children = envelopes(&self.things).map_err(S::Error::custom)?;

        json!({
            "kind": Kind::Listing.as_str(),
            "data": {
                "children": children,
                "after": non_empty(&self.after),
                "before": non_empty(&self.before),
            },
        })
        .serialize(serializer)
    }
}

fn envelopes(things: &Things) -> serde_json::Result<Vec<Envelope>> {
    let mut out = Vec::with_capacity(things.len());
    push_envelopes(&mut out, Kind::Comment, &things.comments)?;
    push_envelopes(&mut out, Kind::More, &things.mores)?;
    push_envelopes(&mut out, Kind::Account, &things.accounts)?;
    push_envelopes(&mut out, Kind::Post, &things.posts)?;
    push_envelopes(&mut out, Kind::Subreddit, &things.subreddits)?;
    push_envelopes(&mut out, Kind::ModAction, &things.mod_actions)?;
    Ok(out)
}

fn push_envelopes<T: Serialize>(
    out: &mut Vec<Envelope>,
    kind: Kind,
    records: &[T],
) -> serde_json::Result<()> {
    for record in records {
        out.push(Envelope::new(kind.as_str(), serde_json::to_value(record)?));
    }
    Ok(())
}

fn non_empty(anchor: &str) -> Option<&str> {
    (!anchor.is_empty()).then_some(anchor)
}
