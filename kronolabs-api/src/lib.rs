mod comment;
pub use comment::{Comment, CommentId, JUST_NOW};

mod content;
pub use content::{ContentKind, ContentRef};

mod error;
pub use error::Error;

mod order;
pub use order::TopLevelOrder;

mod user;
pub use user::Identity;

pub use uuid::{uuid, Uuid};

pub const STUB_UUID: Uuid = uuid!("ffffffff-ffff-ffff-ffff-ffffffffffff");

/// Checks that a submitted comment body has some visible content
///
/// The body itself is stored exactly as submitted, this only looks at its
/// trimmed form. A byte order mark counts as blank, as it does for the
/// mobile client's input trimming.
pub fn validate_body(body: &str) -> Result<(), Error> {
    let visible = body.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if visible.is_empty() {
        return Err(Error::EmptyBody);
    }
    Ok(())
}
