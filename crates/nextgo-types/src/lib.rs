//! Wire types for the next-go-template backend API.
//!
//! This crate owns the payload contracts; the HTTP client in `nextgo-api`
//! depends on these shapes but never defines its own.

mod envelope;
mod health;
mod user;

pub use envelope::{ApiEnvelope, EnvelopeError};
pub use health::{DatabaseHealth, DatabaseHealthResponse, HealthResponse, HealthStatus};
pub use user::{NewUser, UpdateUser, User, UserStatus};
