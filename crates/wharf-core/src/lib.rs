#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod context;
pub mod domain;
pub mod ports;
pub mod registry;
pub mod services;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use context::RequestContext;
pub use domain::{NewUser, SessionEntry, User};
pub use ports::{RepositoryError, SessionStore, UserRepository};
pub use registry::{RegistryError, ServiceRegistry};
pub use services::{AuthError, AuthService, SessionError, SessionService, register_services};
