//! # listing-rs
//!
//! A sans-io decoder for Reddit-style API listings and comment trees.
//!
//! Every object the API returns is wrapped in a `{"kind", "data"}` envelope.
//! This library decodes those envelopes into typed records, buckets them by
//! kind, and rebuilds comment trees from replies that reference their parent
//! only by full ID.
//!
//! ## Design Philosophy
//!
//! This library follows the "sans-io" design pattern:
//! - **Decoding**: response bodies become typed [`Response`]s, [`Listing`]s and records
//! - **I/O Separation**: fetching bodies, authentication and rate limiting stay with the caller
//! - **Permissive classification**: unknown kinds and malformed payloads inside a
//!   listing are skipped, never fatal
//!
//! ## Examples
//!
//! ### Decoding a Listing
//!
//! ```rust
//! use listing_rs::{Anchor, Listing};
//!
//! let body = br#"{
//!     "kind": "Listing",
//!     "data": {
//!         "children": [
//!             {"kind": "t3", "data": {"name": "t3_abc", "title": "Hello"}},
//!             {"kind": "t4", "data": {"body": "a private message"}}
//!         ],
//!         "after": "t3_abc",
//!         "before": null
//!     }
//! }"#;
//!
//! let listing: Listing = serde_json::from_slice(body).unwrap();
//! assert_eq!(listing.things.posts[0].title, "Hello");
//! assert!(listing.has_after());
//! ```
//!
//! ### Sans-IO Decoding
//!
//! ```rust
//! use listing_rs::{Decoder, Response};
//!
//! let mut decoder = Decoder::new();
//! decoder.feed_bytes(br#"{"kind": "t5", "data": {"display_na"#);
//! assert!(decoder.decode_response().unwrap().is_none());
//!
//! decoder.feed_bytes(br#"me": "rust"}}"#);
//! let response = decoder.decode_response().unwrap();
//! assert!(matches!(response, Some(Response::Thing(_))));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod decoder;
pub mod error;
pub mod kind;
pub mod listing;
pub mod model;
pub mod replies;
pub mod response;
pub mod thing;
pub mod threading;

// Wire fixtures for testing
pub mod fixtures;

pub use decoder::Decoder;
pub use error::{Error, Result};
pub use kind::Kind;
pub use listing::{Anchor, Listing, Things};
pub use model::{Account, Comment, ModAction, More, Post, Subreddit, Timestamp};
pub use replies::Replies;
pub use response::Response;
pub use thing::{Envelope, Thing};
pub use threading::{
    Assembler, AttachOptions, AttachReport, CommentTree, OrphanPolicy, PostAndComments,
};
