//! Comment trees.
//!
//! Comments reference their parent only by full ID. This module places them
//! into a tree and walks the result:
//!
//! - [`CommentTree`]: the tree interface shared by [`Comment`](crate::Comment)
//!   and [`PostAndComments`], with lookup and traversal helpers
//! - [`Assembler`]: attaches comments and placeholders under their parents,
//!   with a configurable policy for nodes whose parent is missing
//! - [`PostAndComments`]: a post page, decoded from its two listings
//!
//! # Example
//!
//! ```
//! use listing_rs::fixtures::{self, ListingFixture};
//! use listing_rs::threading::{Assembler, CommentTree, PostAndComments};
//! use listing_rs::Response;
//!
//! let page = fixtures::post_and_comments(
//!     &ListingFixture::new().post("t3_p"),
//!     &ListingFixture::new()
//!         .comment("t1_a", "t3_p")
//!         .more("t1_m", "t3_p", &["t1_b"]),
//! );
//! let mut pc: PostAndComments = serde_json::from_value(page).unwrap();
//!
//! // Comments loaded for the placeholder later arrive as a flat page.
//! let body = fixtures::more_children(vec![fixtures::comment("t1_b", "t1_a")]);
//! let loaded = Response::from_value(body).unwrap().into_things();
//!
//! let report = Assembler::default().attach_things(&mut pc, loaded).unwrap();
//! assert_eq!(report.attached, 1);
//! assert_eq!(pc.count_comments(), 2);
//! ```

mod aggregate;
mod attach;
mod types;

pub use aggregate::PostAndComments;
pub use attach::{Assembler, AttachOptions, AttachReport, OrphanPolicy};
pub use types::{CommentIterator, CommentTree};
