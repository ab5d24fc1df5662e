use std::{collections::HashSet, slice, sync::Arc};

use crate::api::{Comment, CommentId, TopLevelOrder};

/// Immutable view of a comment forest at one point in time
///
/// Cloning is cheap. Updates go through `Arc::make_mut` along the path to the
/// changed comment, so any clone taken earlier keeps seeing the old forest
/// while everything off that path stays shared between the two.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Thread(Arc<Vec<Arc<Comment>>>);

impl Thread {
    pub fn new(comments: Vec<Comment>) -> Thread {
        Thread(Arc::new(comments.into_iter().map(Arc::new).collect()))
    }

    /// Top-level comments
    pub fn comments(&self) -> &[Arc<Comment>] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of comments at every depth
    pub fn count_all(&self) -> usize {
        self.walk().count()
    }

    /// Returns true iff both snapshots are the very same forest, not just equal ones
    pub fn ptr_eq(&self, other: &Thread) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![(0, self.0.iter())],
        }
    }

    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        self.walk().map(|(_, c)| c).find(|c| c.id == *id)
    }

    pub(crate) fn first_duplicate_id(&self) -> Option<&CommentId> {
        let mut seen = HashSet::new();
        self.walk()
            .map(|(_, c)| &c.id)
            .find(|id| !seen.insert(*id))
    }

    /// Child indices leading to the first comment with this id, in pre-order
    pub(crate) fn path_to(&self, id: &CommentId) -> Option<Vec<usize>> {
        // path always has one entry less than stack
        let mut path = Vec::new();
        let mut stack = vec![self.0.iter().enumerate()];
        while let Some(siblings) = stack.last_mut() {
            match siblings.next() {
                Some((i, c)) => {
                    path.push(i);
                    if c.id == *id {
                        return Some(path);
                    }
                    stack.push(c.replies.iter().enumerate());
                }
                None => {
                    stack.pop();
                    path.pop();
                }
            }
        }
        None
    }

    pub(crate) fn insert_top_level(&mut self, comment: Arc<Comment>, order: TopLevelOrder) {
        let comments = Arc::make_mut(&mut self.0);
        match order {
            TopLevelOrder::NewestFirst => comments.insert(0, comment),
            TopLevelOrder::OldestFirst => comments.push(comment),
        }
    }

    /// Runs `f` on the comment at `path`, copying every comment on the way
    /// there that is still shared with another snapshot
    ///
    /// Returns None if `path` does not lead to a comment.
    pub(crate) fn update_at<R>(
        &mut self,
        path: &[usize],
        f: impl FnOnce(&mut Comment) -> R,
    ) -> Option<R> {
        let (last, ancestors) = path.split_last()?;
        let mut comments = Arc::make_mut(&mut self.0);
        for idx in ancestors {
            comments = &mut Arc::make_mut(comments.get_mut(*idx)?).replies;
        }
        Some(f(Arc::make_mut(comments.get_mut(*last)?)))
    }
}

/// Pre-order traversal yielding each comment along with its depth, top-level
/// comments being at depth 0
pub struct Walk<'a> {
    stack: Vec<(usize, slice::Iter<'a, Arc<Comment>>)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a Comment);

    fn next(&mut self) -> Option<(usize, &'a Comment)> {
        loop {
            let (depth, siblings) = self.stack.last_mut()?;
            let depth = *depth;
            match siblings.next() {
                Some(c) => {
                    self.stack.push((depth + 1, c.replies.iter()));
                    return Some((depth, &**c));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
