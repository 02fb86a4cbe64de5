//! Typed records decoded from envelope payloads.
//!
//! # Module Structure
//!
//! - [`comment`] - [`Comment`], a node of a discussion tree
//! - [`more`] - [`More`], the placeholder for comments left out of a tree
//! - [`post`] - [`Post`], a submission
//! - [`subreddit`] - [`Subreddit`]
//! - [`account`] - [`Account`]
//! - [`mod_action`] - [`ModAction`], an entry of the moderation log
//! - [`timestamp`] - [`Timestamp`], epoch-seconds time values
//!
//! Records are pure data. Missing fields decode as their defaults and `null`
//! strings decode as empty strings; a field of the wrong type fails the
//! whole record.

pub mod account;
pub mod comment;
pub mod mod_action;
pub mod more;
pub mod post;
pub mod subreddit;
pub mod timestamp;

pub use account::Account;
pub use comment::Comment;
pub use mod_action::ModAction;
pub use more::More;
pub use post::Post;
pub use subreddit::Subreddit;
pub use timestamp::Timestamp;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Decode `null` as the type's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a struct from a JSON object only.
///
/// Derived struct visitors also accept arrays and match them by position,
/// so wrapper shapes are read through a map first.
pub(crate) fn object<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let map = Map::<String, Value>::deserialize(deserializer)?;
    T::deserialize(Value::Object(map)).map_err(de::Error::custom)
}
