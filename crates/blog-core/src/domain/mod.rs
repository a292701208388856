//! Domain entities - the core business objects.

mod post;

pub use post::{POST_SCHEMA, Post, PostFields, PostInput, PostPatch};
