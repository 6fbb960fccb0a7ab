//! Domain models with validation at construction
//!
//! User input is validated before it reaches the store.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;

pub use validation::ValidationError;
pub use user::{seed_users, CreateUser, NewUser, UpdateUser, User, UserId};
