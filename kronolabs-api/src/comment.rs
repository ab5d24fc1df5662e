use std::{fmt, sync::Arc};

use uuid::Uuid;

use crate::{Identity, STUB_UUID};

/// Label given to every comment created during the current session
pub const JUST_NOW: &str = "Just now";

#[derive(
    Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4().to_string())
    }

    pub fn stub() -> CommentId {
        CommentId(STUB_UUID.to_string())
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(String::from(s))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: Identity,

    /// Text exactly as it was submitted
    pub body: String,

    /// Display-ready relative time, eg. "2h ago"
    pub created_label: String,

    #[serde(default)]
    pub like_count: u64,

    /// Child comments, in the order they were received
    #[serde(default)]
    pub replies: Vec<Arc<Comment>>,
}

impl Comment {
    /// Builds a fresh leaf comment with a newly generated id
    pub fn new(author: Identity, body: String) -> Comment {
        Comment {
            id: CommentId::generate(),
            author,
            body,
            created_label: String::from(JUST_NOW),
            like_count: 0,
            replies: Vec::new(),
        }
    }

    /// Number of comments in this subtree, self included
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(c) = pending.pop() {
            count += 1;
            pending.extend(c.replies.iter().map(|r| &**r));
        }
        count
    }
}

impl Drop for Comment {
    fn drop(&mut self) {
        // unlink children before they drop, so a long reply chain does not
        // recurse once per level
        let mut pending = std::mem::take(&mut self.replies);
        while let Some(child) = pending.pop() {
            if let Ok(mut child) = Arc::try_unwrap(child) {
                pending.append(&mut child.replies);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_comment_is_a_fresh_leaf() {
        let c = Comment::new(Identity::stub(), String::from("hi"));
        assert_eq!(c.created_label, JUST_NOW);
        assert_eq!(c.like_count, 0);
        assert!(c.replies.is_empty());
        assert_ne!(c.id, Comment::new(Identity::stub(), String::from("hi")).id);
    }

    #[test]
    fn seed_json_defaults() {
        let c: Comment = serde_json::from_str(
            r#"{
                "id": "c1",
                "author": { "name": "Mika", "avatar_url": "https://example.com/mika.png" },
                "body": "first!",
                "created_label": "2h ago",
                "replies": [{
                    "id": "c1-1",
                    "author": { "name": "Ren", "avatar_url": "https://example.com/ren.png" },
                    "body": "second",
                    "created_label": "1h ago",
                    "like_count": 4
                }]
            }"#,
        )
        .expect("parsing seed comment");
        assert_eq!(c.id, CommentId::from("c1"));
        assert_eq!(c.like_count, 0);
        assert_eq!(c.replies.len(), 1);
        assert_eq!(c.replies[0].like_count, 4);
        assert!(c.replies[0].replies.is_empty());
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn long_reply_chain() {
        const DEPTH: usize = 200_000;

        let mut chain = Comment::new(Identity::stub(), String::from("bottom"));
        for _ in 1..DEPTH {
            let mut parent = Comment::new(Identity::stub(), String::from("reply"));
            parent.replies.push(Arc::new(chain));
            chain = parent;
        }
        assert_eq!(chain.count(), DEPTH);

        // half the chain is still referenced from elsewhere when the rest drops
        let mut middle = &chain;
        for _ in 0..DEPTH / 2 {
            middle = &*middle.replies[0];
        }
        let kept = Arc::new(middle.clone());
        drop(chain);
        assert_eq!(kept.count(), DEPTH / 2);
    }
}
