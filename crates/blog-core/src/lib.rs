//! # Blog Core
//!
//! The domain layer of the blog posts service.
//! Post types, write-payload validation and the repository port live here;
//! nothing in this crate knows about HTTP or storage.

pub mod domain;
pub mod error;
pub mod ports;
pub mod validation;

pub use error::{DomainError, RepoError};
