//! Record store: owns user records and enforces username/email uniqueness.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::model::{User, UserSchema};

/// Unique column that rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Username,
    Email,
}

impl UniqueField {
    pub fn as_str(self) -> &'static str {
        match self {
            UniqueField::Username => "username",
            UniqueField::Email => "email",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    NotFound(u64),
    #[error("{} already taken", .0.as_str())]
    Conflict(UniqueField),
    #[error("store lock poisoned")]
    Poisoned,
}

/// Storage seam for the user service.
///
/// Each call is one transaction: implementations must make the uniqueness
/// check and the write atomic with respect to other calls.
pub trait UserStore: Send + Sync {
    /// Assign the next id and store. Username collisions win over email ones.
    fn insert(&self, user: &UserSchema) -> Result<User, StoreError>;
    fn get(&self, id: u64) -> Result<User, StoreError>;
    /// All records in creation order.
    fn list(&self) -> Result<Vec<User>, StoreError>;
    /// Replace username, email and password. Collisions with the record
    /// itself are not conflicts.
    fn update(&self, id: u64, user: &UserSchema) -> Result<User, StoreError>;
    fn delete(&self, id: u64) -> Result<(), StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
}

#[derive(Debug)]
struct Tables {
    next_id: u64,
    // ids are monotonic, so key order is creation order
    rows: BTreeMap<u64, User>,
    by_username: HashMap<String, u64>,
    by_email: HashMap<String, u64>,
}

impl Tables {
    fn owner_conflict(&self, user: &UserSchema, except: Option<u64>) -> Option<UniqueField> {
        let taken = |idx: &HashMap<String, u64>, key: &str| {
            idx.get(key).is_some_and(|owner| Some(*owner) != except)
        };
        if taken(&self.by_username, &user.username) {
            Some(UniqueField::Username)
        } else if taken(&self.by_email, &user.email) {
            Some(UniqueField::Email)
        } else {
            None
        }
    }
}

/// Process-local store behind a single lock.
#[derive(Debug)]
pub struct InMemoryUserStore {
    tables: Mutex<Tables>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(Tables {
                next_id: 1,
                rows: BTreeMap::new(),
                by_username: HashMap::new(),
                by_email: HashMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl UserStore for InMemoryUserStore {
    fn insert(&self, user: &UserSchema) -> Result<User, StoreError> {
        let mut t = self.lock()?;
        if let Some(field) = t.owner_conflict(user, None) {
            return Err(StoreError::Conflict(field));
        }

        let id = t.next_id;
        t.next_id += 1;

        let row = User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };
        t.by_username.insert(row.username.clone(), id);
        t.by_email.insert(row.email.clone(), id);
        t.rows.insert(id, row.clone());
        Ok(row)
    }

    fn get(&self, id: u64) -> Result<User, StoreError> {
        let t = self.lock()?;
        t.rows.get(&id).cloned().ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<User>, StoreError> {
        let t = self.lock()?;
        Ok(t.rows.values().cloned().collect())
    }

    fn update(&self, id: u64, user: &UserSchema) -> Result<User, StoreError> {
        let mut t = self.lock()?;
        let (old_username, old_email) = match t.rows.get(&id) {
            Some(row) => (row.username.clone(), row.email.clone()),
            None => return Err(StoreError::NotFound(id)),
        };
        if let Some(field) = t.owner_conflict(user, Some(id)) {
            return Err(StoreError::Conflict(field));
        }

        t.by_username.remove(&old_username);
        t.by_email.remove(&old_email);
        t.by_username.insert(user.username.clone(), id);
        t.by_email.insert(user.email.clone(), id);

        let row = User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };
        t.rows.insert(id, row.clone());
        Ok(row)
    }

    fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut t = self.lock()?;
        let row = t.rows.remove(&id).ok_or(StoreError::NotFound(id))?;
        t.by_username.remove(&row.username);
        t.by_email.remove(&row.email);
        Ok(())
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.lock()?.rows.len())
    }
}
