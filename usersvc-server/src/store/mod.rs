//! User storage
//!
//! Handlers only see the [`UserStore`] trait. The in-memory implementation
//! stands in for a database; a persistent backend would implement the same
//! five operations.

pub mod memory;

use async_trait::async_trait;

use crate::models::{NewUser, UpdateUser, User, UserId};

pub use memory::MemoryUserStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: UserId },
}

/// The users resource contract.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users in insertion order.
    async fn list(&self) -> Vec<User>;

    async fn get(&self, id: UserId) -> Result<User, StoreError>;

    /// Assign an id to `new`, append it, and return the stored record.
    async fn create(&self, new: NewUser) -> User;

    /// Apply `changes` to the user in place and return the result.
    async fn update(&self, id: UserId, changes: UpdateUser) -> Result<User, StoreError>;

    /// Remove the user, preserving the order of the rest.
    async fn delete(&self, id: UserId) -> Result<User, StoreError>;
}
