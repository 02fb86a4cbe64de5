//! Tagged envelopes and the sum type they decode into.
//!
//! Decoding happens in two phases: the `kind` discriminator is read first,
//! then the payload is decoded as the record that kind names. The payload is
//! held as an opaque [`Value`] until then.

use std::borrow::Cow;

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::model::{nullable, object, Account, Comment, ModAction, More, Post, Subreddit};

/// The atomic wire unit: a kind discriminator and its payload.
///
/// Only a JSON object decodes as an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Envelope {
    /// Kind discriminator (`t1`, `more`, ...)
    pub kind: String,
    /// Payload, interpretable once the kind is known
    pub data: Value,
}

#[derive(Deserialize)]
struct EnvelopeWire {
    #[serde(default, deserialize_with = "nullable")]
    kind: String,
    #[serde(default)]
    data: Value,
}

impl<'de> Deserialize<'de> for Envelope {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let EnvelopeWire { kind, data } = object(deserializer)?;
        Ok(Envelope { kind, data })
    }
}

impl Envelope {
    /// Create an envelope from a discriminator and a payload.
    pub fn new(kind: impl Into<String>, data: Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }

    /// Decode the payload into the record named by the kind.
    ///
    /// Kinds outside the decode table yield [`Thing::Unsupported`] rather
    /// than an error. A supported kind whose payload does not decode yields
    /// [`Error::Payload`]. Records decode from JSON objects only.
    pub fn decode(self) -> Result<Thing> {
        let Some(decode) = Kind::parse(&self.kind).and_then(decoder) else {
            return Ok(Thing::Unsupported {
                kind: self.kind,
                data: self.data,
            });
        };

        if !self.data.is_object() {
            return Err(Error::Payload {
                kind: self.kind,
                message: "payload is not an object".to_string(),
            });
        }

        decode(self.data).map_err(|err| Error::Payload {
            kind: self.kind,
            message: err.to_string(),
        })
    }
}

type DecodeFn = fn(Value) -> serde_json::Result<Thing>;

/// Payload decoders for every classified kind.
static DECODERS: [(Kind, DecodeFn); 6] = [
    (Kind::Comment, decode_comment),
    (Kind::More, decode_more),
    (Kind::Account, decode_account),
    (Kind::Post, decode_post),
    (Kind::Subreddit, decode_subreddit),
    (Kind::ModAction, decode_mod_action),
];

fn decoder(kind: Kind) -> Option<DecodeFn> {
    DECODERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, decode)| *decode)
}

fn decode_comment(data: Value) -> serde_json::Result<Thing> {
    serde_json::from_value(data).map(|c| Thing::Comment(Box::new(c)))
}

fn decode_more(data: Value) -> serde_json::Result<Thing> {
    serde_json::from_value(data).map(Thing::More)
}

fn decode_account(data: Value) -> serde_json::Result<Thing> {
    serde_json::from_value(data).map(Thing::Account)
}

fn decode_post(data: Value) -> serde_json::Result<Thing> {
    serde_json::from_value(data).map(|p| Thing::Post(Box::new(p)))
}

fn decode_subreddit(data: Value) -> serde_json::Result<Thing> {
    serde_json::from_value(data).map(Thing::Subreddit)
}

fn decode_mod_action(data: Value) -> serde_json::Result<Thing> {
    serde_json::from_value(data).map(Thing::ModAction)
}

/// A decoded envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    /// `t1`
    Comment(Box<Comment>),
    /// `more`
    More(More),
    /// `t2`
    Account(Account),
    /// `t3`
    Post(Box<Post>),
    /// `t5`
    Subreddit(Subreddit),
    /// `modaction`
    ModAction(ModAction),
    /// Any kind without a typed record, payload kept as is
    Unsupported {
        /// Kind discriminator as it appeared on the wire
        kind: String,
        /// Raw payload
        data: Value,
    },
}

impl Thing {
    /// The kind discriminator this thing is encoded with.
    pub fn kind(&self) -> &str {
        match self {
            Thing::Comment(_) => Kind::Comment.as_str(),
            Thing::More(_) => Kind::More.as_str(),
            Thing::Account(_) => Kind::Account.as_str(),
            Thing::Post(_) => Kind::Post.as_str(),
            Thing::Subreddit(_) => Kind::Subreddit.as_str(),
            Thing::ModAction(_) => Kind::ModAction.as_str(),
            Thing::Unsupported { kind, .. } => kind,
        }
    }

    /// Full ID of the record, as later things name it in `parent_id`.
    ///
    /// Accounts carry only a short ID on the wire, so theirs is built.
    /// Moderation log entries have none. For unsupported things the payload's
    /// `name` is used if present.
    pub fn full_id(&self) -> Option<Cow<'_, str>> {
        let full_id = match self {
            Thing::Comment(c) => Cow::Borrowed(c.full_id.as_str()),
            Thing::More(m) => Cow::Borrowed(m.full_id.as_str()),
            Thing::Account(a) => Cow::Owned(a.full_id()),
            Thing::Post(p) => Cow::Borrowed(p.full_id.as_str()),
            Thing::Subreddit(s) => Cow::Borrowed(s.full_id.as_str()),
            Thing::ModAction(_) => return None,
            Thing::Unsupported { data, .. } => Cow::Borrowed(data.get("name")?.as_str()?),
        };
        (!full_id.is_empty()).then_some(full_id)
    }

    /// Whether this thing has a typed record.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Thing::Unsupported { .. })
    }

    /// Wrap the record back into an envelope for encoding.
    pub fn into_envelope(self) -> Result<Envelope> {
        let kind = self.kind().to_string();
        let data = match self {
            Thing::Comment(c) => serde_json::to_value(*c),
            Thing::More(m) => serde_json::to_value(m),
            Thing::Account(a) => serde_json::to_value(a),
            Thing::Post(p) => serde_json::to_value(*p),
            Thing::Subreddit(s) => serde_json::to_value(s),
            Thing::ModAction(m) => serde_json::to_value(m),
            Thing::Unsupported { data, .. } => Ok(data),
        }
        .map_err(|err| Error::Encode(err.to_string()))?;

        Ok(Envelope { kind, data })
    }
}

impl From<Comment> for Thing {
    fn from(value: Comment) -> Self {
        Thing::Comment(Box::new(value))
    }
}

impl From<More> for Thing {
    fn from(value: More) -> Self {
        Thing::More(value)
    }
}

impl From<Post> for Thing {
    fn from(value: Post) -> Self {
        Thing::Post(Box::new(value))
    }
}
