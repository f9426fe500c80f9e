//! `SQLite` implementations of the `wharf-core` ports.

pub mod sqlite_session_store;
pub mod sqlite_user_repository;

pub use sqlite_session_store::SqliteSessionStore;
pub use sqlite_user_repository::SqliteUserRepository;

use wharf_core::RepositoryError;

/// Map a sqlx error onto the domain error taxonomy.
///
/// Constraint kinds are distinguished so callers can tell integrity
/// violations from plain storage failures.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound(error.to_string()),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::AlreadyExists(error.to_string())
        }
        sqlx::Error::Database(db)
            if db.is_foreign_key_violation() || db.is_check_violation() =>
        {
            RepositoryError::Constraint(error.to_string())
        }
        _ => RepositoryError::Storage(error.to_string()),
    }
}

/// Timestamp format shared by all repositories.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
