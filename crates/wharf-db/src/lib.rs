#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod lifecycle;
pub mod repositories;
pub mod schema;
pub mod session;
pub mod setup;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

// Re-export the lifecycle types
pub use lifecycle::{Database, DbHandle, LifecycleState, bind_session, cleanup_tables};

// Re-export repository implementations
pub use repositories::{SqliteSessionStore, SqliteUserRepository};

pub use session::ScopedSession;

// Re-export setup functions for convenient access
pub use setup::setup_database;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;
