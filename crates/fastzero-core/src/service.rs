//! User service: validation and CRUD orchestration over a [`UserStore`].
//!
//! Create reports the colliding field (`DuplicateUsername` before
//! `DuplicateEmail`); update reports a single combined
//! `UsernameOrEmailConflict`. Clients rely on both shapes.

use std::sync::Arc;

use crate::error::{ClientCode, FastZeroError, Result};
use crate::model::{UserList, UserPublic, UserSchema};
use crate::store::{StoreError, UniqueField, UserStore};

/// Default per-field size limit in bytes.
pub const DEFAULT_MAX_FIELD_BYTES: usize = 256;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    max_field_bytes: usize,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            max_field_bytes: DEFAULT_MAX_FIELD_BYTES,
        }
    }

    pub fn with_max_field_bytes(mut self, max_field_bytes: usize) -> Self {
        self.max_field_bytes = max_field_bytes;
        self
    }

    pub fn create_user(&self, req: &UserSchema) -> Result<UserPublic> {
        req.validate(self.max_field_bytes)?;

        let user = self
            .store
            .insert(req)
            .map_err(|e| match e {
                StoreError::Conflict(UniqueField::Username) => FastZeroError::DuplicateUsername,
                StoreError::Conflict(UniqueField::Email) => FastZeroError::DuplicateEmail,
                other => internal(other),
            })
            .inspect_err(|e| {
                tracing::debug!(
                    code = e.client_code().as_str(),
                    username = %req.username,
                    err = %e,
                    "create rejected"
                )
            })?;

        tracing::info!(user_id = user.id, username = %user.username, "user created");
        Ok(user.public())
    }

    pub fn list_users(&self) -> Result<UserList> {
        let users = self.store.list().map_err(internal)?;
        Ok(UserList {
            users: users.iter().map(|u| u.public()).collect(),
        })
    }

    pub fn get_user(&self, id: u64) -> Result<UserPublic> {
        self.store.get(id).map(|u| u.public()).map_err(not_found_or_internal)
    }

    pub fn update_user(&self, id: u64, req: &UserSchema) -> Result<UserPublic> {
        req.validate(self.max_field_bytes)?;

        let user = self.store.update(id, req).map_err(|e| match e {
            StoreError::Conflict(field) => {
                tracing::debug!(
                    code = ClientCode::Conflict.as_str(),
                    user_id = id,
                    field = field.as_str(),
                    "update conflict"
                );
                FastZeroError::UsernameOrEmailConflict
            }
            other => not_found_or_internal(other),
        })?;

        tracing::info!(user_id = user.id, username = %user.username, "user updated");
        Ok(user.public())
    }

    pub fn delete_user(&self, id: u64) -> Result<()> {
        self.store.delete(id).map_err(not_found_or_internal)?;
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        self.store.count().map_err(internal)
    }
}

fn not_found_or_internal(e: StoreError) -> FastZeroError {
    match e {
        StoreError::NotFound(_) => FastZeroError::NotFound,
        other => internal(other),
    }
}

fn internal(e: StoreError) -> FastZeroError {
    tracing::warn!(err = %e, "store failure");
    FastZeroError::Internal(e.to_string())
}
