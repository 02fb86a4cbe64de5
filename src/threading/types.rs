//! The comment tree abstraction shared by comments and posts.

use crate::model::{Comment, More};

use super::attach::Assembler;

/// A node that owns a tree of comments: a comment with its replies, or a
/// post with its top-level comments.
///
/// Parent/child links are expressed only by full ID equality: a comment
/// belongs under the node whose full ID equals its `parent_id`.
pub trait CommentTree {
    /// Full ID that direct children name as their `parent_id`.
    fn full_id(&self) -> &str;

    /// Direct child comments.
    fn comments(&self) -> &[Comment];

    /// Direct child comments, for appending.
    fn comments_mut(&mut self) -> &mut Vec<Comment>;

    /// Placeholder for direct children not yet loaded.
    fn more(&self) -> Option<&More>;

    /// Placeholder slot, for replacing.
    fn more_mut(&mut self) -> &mut Option<More>;

    /// Whether this node's placeholder lists comments still to be loaded.
    fn has_more(&self) -> bool {
        self.more().is_some_and(More::has_children)
    }

    /// Attach a comment under its parent anywhere in this tree.
    ///
    /// Returns `false` if no parent was found and the comment was dropped.
    fn add_comment(&mut self, comment: Comment) -> bool {
        matches!(Assembler::default().attach_comment(self, comment), Ok(true))
    }

    /// Attach a placeholder to its parent anywhere in this tree, replacing
    /// any placeholder the parent already had.
    ///
    /// Returns `false` if no parent was found and the placeholder was dropped.
    fn add_more(&mut self, more: More) -> bool {
        matches!(Assembler::default().attach_more(self, more), Ok(true))
    }

    /// Find a comment by full ID below this node.
    fn find_by_full_id(&self, full_id: &str) -> Option<&Comment> {
        self.iter().find(|c| c.full_id == full_id)
    }

    /// Count all comments below this node.
    fn count_comments(&self) -> usize {
        self.iter().count()
    }

    /// Number of comment levels below this node (0 if it has no comments).
    fn max_depth(&self) -> usize {
        let mut stack: Vec<(&Comment, usize)> = self.comments().iter().map(|c| (c, 1)).collect();
        let mut max = 0;
        while let Some((comment, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(comment.replies.comments.iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Iterate over all comments below this node (depth-first, in order).
    fn iter(&self) -> CommentIterator<'_> {
        CommentIterator::new(self.comments())
    }

    /// Every placeholder in the tree: this node's first, then those of the
    /// comments below it in depth-first order.
    ///
    /// These are the entry points for fetching the comments left out.
    fn pending_mores(&self) -> Vec<&More> {
        self.more()
            .into_iter()
            .chain(self.iter().filter_map(|c| c.replies.more.as_ref()))
            .collect()
    }
}

impl CommentTree for Comment {
    fn full_id(&self) -> &str {
        &self.full_id
    }

    fn comments(&self) -> &[Comment] {
        &self.replies.comments
    }

    fn comments_mut(&mut self) -> &mut Vec<Comment> {
        &mut self.replies.comments
    }

    fn more(&self) -> Option<&More> {
        self.replies.more.as_ref()
    }

    fn more_mut(&mut self) -> &mut Option<More> {
        &mut self.replies.more
    }
}

/// Iterator over all comments of a tree (depth-first traversal).
pub struct CommentIterator<'a> {
    stack: Vec<&'a Comment>,
}

impl<'a> CommentIterator<'a> {
    /// Create an iterator over the given comments and everything below them.
    pub fn new(comments: &'a [Comment]) -> Self {
        Self {
            stack: comments.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for CommentIterator<'a> {
    type Item = &'a Comment;

    fn next(&mut self) -> Option<Self::Item> {
        let comment = self.stack.pop()?;
        // Push replies in reverse order so they're processed left-to-right
        for reply in comment.replies.comments.iter().rev() {
            self.stack.push(reply);
        }
        Some(comment)
    }
}
