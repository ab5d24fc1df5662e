/// Where a store puts newly submitted top-level comments
///
/// Replies are always appended, this only concerns the top level.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TopLevelOrder {
    /// New comments go first, like the post feed
    NewestFirst,

    /// New comments go last, like the comic reader and town square
    OldestFirst,
}
