//! # Taskboard Shared Library
//!
//! This crate contains the models, data-access layer, and authentication
//! primitives shared by the Taskboard API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their read/write operations
//! - `factory`: Task construction service (single creation path for tasks)
//! - `auth`: Password hashing, JWT tokens, middleware, authorization
//! - `db`: Connection pooling and migrations

pub mod auth;
pub mod db;
pub mod factory;
pub mod models;

/// Current version of the Taskboard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
