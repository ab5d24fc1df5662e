use std::sync::Arc;

use anyhow::Context;

use crate::{
    api::{self, Comment, CommentId, ContentRef, Error, Identity, TopLevelOrder},
    Thread,
};

/// The comment forest of one content item
///
/// Every mutation leaves previously taken snapshots untouched, so a renderer
/// holding the last `Thread` it drew can detect changes with `Thread::ptr_eq`.
#[derive(Clone, Debug)]
pub struct CommentThreadStore {
    content: ContentRef,
    order: TopLevelOrder,
    thread: Thread,
}

impl CommentThreadStore {
    /// Takes the seed forest as-is. Comment ids are expected to be unique
    /// across the whole forest, this is only checked to emit a warning.
    pub fn initialize(
        content: ContentRef,
        order: TopLevelOrder,
        forest: Vec<Comment>,
    ) -> CommentThreadStore {
        let thread = Thread::new(forest);
        if let Some(dup) = thread.first_duplicate_id() {
            tracing::warn!(%content, id = %dup, "seed forest has duplicate comment ids");
        }
        CommentThreadStore {
            content,
            order,
            thread,
        }
    }

    pub fn from_json(
        content: ContentRef,
        order: TopLevelOrder,
        json: &str,
    ) -> anyhow::Result<CommentThreadStore> {
        let forest: Vec<Comment> = serde_json::from_str(json)
            .with_context(|| format!("parsing seed comments for {content}"))?;
        Ok(CommentThreadStore::initialize(content, order, forest))
    }

    pub fn content(&self) -> &ContentRef {
        &self.content
    }

    pub fn order(&self) -> TopLevelOrder {
        self.order
    }

    pub fn thread(&self) -> &Thread {
        &self.thread
    }

    pub fn snapshot(&self) -> Thread {
        self.thread.clone()
    }

    pub fn count_all(&self) -> usize {
        self.thread.count_all()
    }

    pub fn find(&self, id: &CommentId) -> Option<&Comment> {
        self.thread.find(id)
    }

    fn accepts(&self, body: &str) -> bool {
        match api::validate_body(body) {
            Ok(()) => true,
            Err(err) => {
                tracing::trace!(content = %self.content, %err, "ignoring comment submission");
                false
            }
        }
    }

    /// Returns None without touching the forest if `body` is blank
    pub fn submit_top_level(&mut self, body: &str, author: Identity) -> Option<Arc<Comment>> {
        if !self.accepts(body) {
            return None;
        }
        let comment = Arc::new(Comment::new(author, String::from(body)));
        self.thread.insert_top_level(comment.clone(), self.order);
        tracing::debug!(content = %self.content, id = %comment.id, "added top-level comment");
        Some(comment)
    }

    /// Appends a reply to the first comment with id `parent_id`, at any depth
    ///
    /// A blank `body` is ignored with `Ok(None)` before the parent is looked up.
    pub fn submit_reply(
        &mut self,
        parent_id: &CommentId,
        body: &str,
        author: Identity,
    ) -> Result<Option<Arc<Comment>>, Error> {
        if !self.accepts(body) {
            return Ok(None);
        }
        let path = self.path_to(parent_id)?;
        let reply = Arc::new(Comment::new(author, String::from(body)));
        self.thread
            .update_at(&path, |parent| parent.replies.push(reply.clone()))
            .ok_or_else(|| Error::CommentNotFound(parent_id.clone()))?;
        tracing::debug!(
            content = %self.content,
            id = %reply.id,
            parent = %parent_id,
            depth = path.len(),
            "added reply"
        );
        Ok(Some(reply))
    }

    /// Returns the new like count
    pub fn like(&mut self, id: &CommentId) -> Result<u64, Error> {
        self.update_likes(id, |n| n.saturating_add(1))
    }

    /// Returns the new like count, which never goes below zero
    pub fn unlike(&mut self, id: &CommentId) -> Result<u64, Error> {
        self.update_likes(id, |n| n.saturating_sub(1))
    }

    fn update_likes(&mut self, id: &CommentId, f: impl FnOnce(u64) -> u64) -> Result<u64, Error> {
        let path = self.path_to(id)?;
        self.thread
            .update_at(&path, |c| {
                c.like_count = f(c.like_count);
                c.like_count
            })
            .ok_or_else(|| Error::CommentNotFound(id.clone()))
    }

    fn path_to(&self, id: &CommentId) -> Result<Vec<usize>, Error> {
        self.thread.path_to(id).ok_or_else(|| {
            tracing::warn!(content = %self.content, %id, "comment not found");
            Error::CommentNotFound(id.clone())
        })
    }
}
