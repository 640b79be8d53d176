// ============================
// crates/backend-lib/src/store.rs
// ============================
//! User-store abstraction with in-memory and flat-file implementations.
//!
//! Records are kept in insertion order and looked up by first match,
//! mirroring `findOne`/`updateOne`/`deleteOne` semantics. No uniqueness
//! constraint is enforced at this layer: two concurrent signups for the
//! same unused name can both land, producing duplicate records. Each
//! operation is individually atomic, but nothing spans two operations.
use std::{
    fs,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::fs as tokio_fs;

use crate::error::AppError;
use accounts_common::UserRecord;

/// Trait for user-store backends
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find the first record with the given name
    async fn find(&self, name: &str) -> Result<Option<UserRecord>, AppError>;

    /// Insert a record unconditionally
    async fn insert(&self, record: UserRecord) -> Result<(), AppError>;

    /// Replace the password of the first record with the given name.
    /// Returns `false` if no record matched.
    async fn update_password(&self, name: &str, password: &str) -> Result<bool, AppError>;

    /// Delete the first record with the given name.
    /// Returns `false` if no record matched.
    async fn delete(&self, name: &str) -> Result<bool, AppError>;

    /// All records, in insertion order
    async fn list(&self) -> Result<Vec<UserRecord>, AppError>;
}

/// In-memory implementation of the `UserStore` trait, used by tests and
/// available as a non-persistent backend.
#[derive(Default)]
pub struct MemoryUserStore {
    users: parking_lot::RwLock<Vec<UserRecord>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find(&self, name: &str) -> Result<Option<UserRecord>, AppError> {
        let users = self.users.read();
        Ok(users.iter().find(|u| u.name == name).cloned())
    }

    async fn insert(&self, record: UserRecord) -> Result<(), AppError> {
        self.users.write().push(record);
        Ok(())
    }

    async fn update_password(&self, name: &str, password: &str) -> Result<bool, AppError> {
        let mut users = self.users.write();
        match users.iter_mut().find(|u| u.name == name) {
            Some(user) => {
                user.password = password.to_string();
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let mut users = self.users.write();
        match users.iter().position(|u| u.name == name) {
            Some(index) => {
                users.remove(index);
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        Ok(self.users.read().clone())
    }
}

/// Flat-file implementation of the `UserStore` trait.
///
/// All records live in a single `users.json` under the data directory;
/// every mutation is a whole-file read-modify-write guarded by a lock.
pub struct FlatFileUserStore {
    path: PathBuf,
    lock: tokio::sync::RwLock<()>,
}

impl FlatFileUserStore {
    pub fn new<P: AsRef<Path>>(root: P) -> anyhow::Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self {
            path: root.join("users.json"),
            lock: tokio::sync::RwLock::new(()),
        })
    }

    async fn read_all(&self) -> Result<Vec<UserRecord>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = tokio_fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    async fn write_all(&self, users: &[UserRecord]) -> Result<(), AppError> {
        let json = serde_json::to_string_pretty(users)?;
        tokio_fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for FlatFileUserStore {
    async fn find(&self, name: &str) -> Result<Option<UserRecord>, AppError> {
        let _guard = self.lock.read().await;
        let users = self.read_all().await?;
        Ok(users.into_iter().find(|u| u.name == name))
    }

    async fn insert(&self, record: UserRecord) -> Result<(), AppError> {
        let _guard = self.lock.write().await;
        let mut users = self.read_all().await?;
        users.push(record);
        self.write_all(&users).await
    }

    async fn update_password(&self, name: &str, password: &str) -> Result<bool, AppError> {
        let _guard = self.lock.write().await;
        let mut users = self.read_all().await?;
        match users.iter_mut().find(|u| u.name == name) {
            Some(user) => {
                user.password = password.to_string();
                self.write_all(&users).await?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let _guard = self.lock.write().await;
        let mut users = self.read_all().await?;
        match users.iter().position(|u| u.name == name) {
            Some(index) => {
                users.remove(index);
                self.write_all(&users).await?;
                Ok(true)
            },
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        let _guard = self.lock.read().await;
        self.read_all().await
    }
}
