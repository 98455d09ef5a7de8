/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Token issuance (login, refresh)
/// - `users`: User collection endpoints
/// - `tasks`: Task collection and detail endpoints

pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;
