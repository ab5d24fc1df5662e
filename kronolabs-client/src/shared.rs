use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    api::{Comment, CommentId, Error, Identity},
    CommentThreadStore, Thread,
};

/// A `CommentThreadStore` that can be handed to several threads
///
/// Each operation holds the lock for its whole duration, so looking up a
/// parent and appending to it cannot interleave with another submission.
#[derive(Clone, Debug)]
pub struct SharedThreadStore(Arc<Mutex<CommentThreadStore>>);

impl SharedThreadStore {
    pub fn new(store: CommentThreadStore) -> SharedThreadStore {
        SharedThreadStore(Arc::new(Mutex::new(store)))
    }

    pub fn snapshot(&self) -> Thread {
        self.0.lock().snapshot()
    }

    pub fn count_all(&self) -> usize {
        self.0.lock().count_all()
    }

    pub fn submit_top_level(&self, body: &str, author: Identity) -> Option<Arc<Comment>> {
        self.0.lock().submit_top_level(body, author)
    }

    pub fn submit_reply(
        &self,
        parent_id: &CommentId,
        body: &str,
        author: Identity,
    ) -> Result<Option<Arc<Comment>>, Error> {
        self.0.lock().submit_reply(parent_id, body, author)
    }

    pub fn like(&self, id: &CommentId) -> Result<u64, Error> {
        self.0.lock().like(id)
    }

    pub fn unlike(&self, id: &CommentId) -> Result<u64, Error> {
        self.0.lock().unlike(id)
    }
}
