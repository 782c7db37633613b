//! User record and its wire shapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::{FastZeroError, Result};

/// Stored user record. Owned by the store; everything else sees copies.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Public view (password stripped).
    pub fn public(&self) -> UserPublic {
        UserPublic {
            username: self.username.clone(),
            email: self.email.clone(),
            id: self.id,
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Create/update request body. All fields required.
#[derive(Clone, Deserialize)]
pub struct UserSchema {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserSchema {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Shape checks only; uniqueness is the store's job.
    pub fn validate(&self, max_field_bytes: usize) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(FastZeroError::Invalid("username must not be empty".into()));
        }
        if !self.email.validate_email() || !is_dot_atom_with_domain(&self.email) {
            return Err(FastZeroError::Invalid(
                "email must be a valid email address".into(),
            ));
        }
        for (field, value) in [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
        ] {
            if value.len() > max_field_bytes {
                return Err(FastZeroError::Invalid(format!(
                    "{field} must be at most {max_field_bytes} bytes"
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for UserSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserSchema")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Extra rules on top of `validate_email`: no leading, trailing, or doubled
/// dots in the local part, and a dotted domain.
fn is_dot_atom_with_domain(email: &str) -> bool {
    email.rsplit_once('@').is_some_and(|(local, domain)| {
        !local.starts_with('.')
            && !local.ends_with('.')
            && !local.contains("..")
            && domain.contains('.')
    })
}

/// User as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPublic {
    pub username: String,
    pub email: String,
    pub id: u64,
}

/// `GET /users` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<UserPublic>,
}

/// `{"message": ...}` body used by the root and delete routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
