mod thread;
pub use thread::{Thread, Walk};

mod store;
pub use store::CommentThreadStore;

mod shared;
pub use shared::SharedThreadStore;

mod fuzz;

pub mod api {
    pub use kronolabs_api::*;
}
