//! fastzero core: user records, uniqueness-enforcing storage, and the user service.
//!
//! This crate defines the domain model and error surface shared by the HTTP
//! api and its tests. It carries no transport or runtime dependencies so the
//! store and service can be exercised directly.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FastZeroError`/`Result` so a bad
//! request or a poisoned lock never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod service;
pub mod store;

/// Shared result type.
pub use error::{ClientCode, FastZeroError, Result};
pub use model::{Message, User, UserList, UserPublic, UserSchema};
pub use service::UserService;
pub use store::{InMemoryUserStore, StoreError, UniqueField, UserStore};
