//! Typed async client for the next-go-template backend API.
//!
//! [`HttpClient`] is the shared transport; [`HealthClient`] and
//! [`UsersClient`] are thin per-surface accessors on top of it.

mod client;
mod health;
mod users;

pub use client::{ApiError, HttpClient};
pub use health::{HealthCheck, HealthClient};
pub use users::UsersClient;
