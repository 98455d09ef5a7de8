/// Database models for Taskboard
///
/// This module contains all database models and their persistence
/// operations.
///
/// # Models
///
/// - `user`: Application user records (no password material)
/// - `credential`: Identity store records (username + password hash)
/// - `task`: Tasks owned by a single user
///
/// Task rows are created only through [`crate::factory::TaskFactory`]; the
/// task model itself exposes reads only.

pub mod credential;
pub mod task;
pub mod user;
