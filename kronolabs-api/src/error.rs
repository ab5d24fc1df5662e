use crate::CommentId;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment body is empty")]
    EmptyBody,

    #[error("Comment not found {0}")]
    CommentNotFound(CommentId),
}
