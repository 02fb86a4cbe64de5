//! Attaching comments and placeholders to an existing tree.
//!
//! A flat page of comments from the API arrives in an order where every
//! comment's parent comes before the comment itself. Attaching the page in
//! that order, one comment at a time, rebuilds the tree: each comment's
//! parent is already in place when the comment is searched for it.
//!
//! The search walks the tree depth-first with an explicit stack, so a deep
//! thread cannot exhaust the call stack.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::listing::Things;
use crate::model::{Comment, More};

use super::types::CommentTree;

/// What to do with a node whose parent is not in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrphanPolicy {
    /// Drop the node and report `Ok(false)`
    #[default]
    Drop,
    /// Fail with [`Error::Orphan`]
    Reject,
}

/// Options for attaching nodes to a tree.
#[derive(Debug, Clone, Default)]
pub struct AttachOptions {
    /// Handling of nodes with no matching parent
    pub orphans: OrphanPolicy,
}

impl AttachOptions {
    /// Drop unmatched nodes silently (the default).
    pub fn lenient() -> Self {
        Self {
            orphans: OrphanPolicy::Drop,
        }
    }

    /// Fail on the first unmatched node.
    pub fn strict() -> Self {
        Self {
            orphans: OrphanPolicy::Reject,
        }
    }
}

/// Counts from merging a batch of things into a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachReport {
    /// Comments and placeholders placed in the tree
    pub attached: usize,
    /// Comments and placeholders with no parent in the tree
    pub dropped: usize,
}

/// Places comments and placeholders under their parents by full ID.
///
/// Attach calls mutate the tree and must not run concurrently against the
/// same tree.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    options: AttachOptions,
}

impl Assembler {
    /// Create an assembler with the given options.
    pub fn new(options: AttachOptions) -> Self {
        Self { options }
    }

    /// Get the options in use.
    pub fn options(&self) -> &AttachOptions {
        &self.options
    }

    /// Append `comment` to the direct comments of the node whose full ID is
    /// the comment's `parent_id`.
    ///
    /// The root itself is checked first, then every comment below it in
    /// depth-first order. The search stops at the first match, so the comment
    /// is attached once even if several nodes share the parent's full ID.
    /// Returns `Ok(false)` if no parent was found and the policy drops orphans.
    pub fn attach_comment<T>(&self, root: &mut T, comment: Comment) -> Result<bool>
    where
        T: CommentTree + ?Sized,
    {
        if root.full_id() == comment.parent_id {
            trace!(full_id = %comment.full_id, parent_id = %comment.parent_id, "attached comment");
            root.comments_mut().push(comment);
            return Ok(true);
        }

        match find_comment_mut(root.comments_mut(), &comment.parent_id) {
            Some(parent) => {
                trace!(full_id = %comment.full_id, parent_id = %comment.parent_id, "attached comment");
                parent.replies.comments.push(comment);
                Ok(true)
            }
            None => self.orphan(comment.full_id, comment.parent_id),
        }
    }

    /// Set `more` as the placeholder of the node whose full ID is its
    /// `parent_id`, replacing any placeholder that node already had.
    pub fn attach_more<T>(&self, root: &mut T, more: More) -> Result<bool>
    where
        T: CommentTree + ?Sized,
    {
        let slot = if root.full_id() == more.parent_id {
            root.more_mut()
        } else {
            match find_comment_mut(root.comments_mut(), &more.parent_id) {
                Some(parent) => &mut parent.replies.more,
                None => return self.orphan(more.full_id, more.parent_id),
            }
        };

        if let Some(previous) = slot.as_ref() {
            debug!(
                previous = %previous.full_id,
                full_id = %more.full_id,
                parent_id = %more.parent_id,
                "replacing placeholder"
            );
        }
        trace!(full_id = %more.full_id, parent_id = %more.parent_id, "attached placeholder");
        *slot = Some(more);
        Ok(true)
    }

    /// Merge a batch of things into the tree: every comment in order, then
    /// every placeholder in order. Things of other kinds are ignored.
    ///
    /// With [`OrphanPolicy::Reject`] the merge stops at the first orphan;
    /// nodes attached before it stay in the tree.
    pub fn attach_things<T>(&self, root: &mut T, things: Things) -> Result<AttachReport>
    where
        T: CommentTree + ?Sized,
    {
        let mut report = AttachReport::default();

        for comment in things.comments {
            if self.attach_comment(root, comment)? {
                report.attached += 1;
            } else {
                report.dropped += 1;
            }
        }

        for more in things.mores {
            if self.attach_more(root, more)? {
                report.attached += 1;
            } else {
                report.dropped += 1;
            }
        }

        Ok(report)
    }

    fn orphan(&self, full_id: String, parent_id: String) -> Result<bool> {
        match self.options.orphans {
            OrphanPolicy::Drop => {
                debug!(%full_id, %parent_id, "dropping node with no parent in tree");
                Ok(false)
            }
            OrphanPolicy::Reject => Err(Error::Orphan { full_id, parent_id }),
        }
    }
}

/// Find the first comment with `full_id` among `comments` and everything
/// below them, in depth-first order.
fn find_comment_mut<'a>(comments: &'a mut [Comment], full_id: &str) -> Option<&'a mut Comment> {
    let mut stack: Vec<&'a mut Comment> = comments.iter_mut().rev().collect();
    while let Some(comment) = stack.pop() {
        if comment.full_id == full_id {
            return Some(comment);
        }
        stack.extend(comment.replies.comments.iter_mut().rev());
    }
    None
}
