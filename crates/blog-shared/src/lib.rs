//! # Blog Shared
//!
//! Wire types shared by the server and its clients.

pub mod response;

pub use response::ErrorResponse;
