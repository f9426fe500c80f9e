//! Application-scoped services.
//!
//! Services are registered once at application-factory time and resolved
//! through the [`ServiceRegistry`](crate::registry::ServiceRegistry).
//! Per-request state reaches them through an explicit
//! [`RequestContext`](crate::context::RequestContext).

pub mod auth;
pub mod sessions;

use std::sync::Arc;

pub use auth::{AuthError, AuthService};
pub use sessions::{SessionError, SessionService};

use crate::registry::ServiceRegistry;

/// Register all application-scoped services into the registry.
///
/// The service list is explicit and deterministic; calling this more than
/// once on the same registry overwrites rather than duplicates bindings.
pub fn register_services(registry: &ServiceRegistry) {
    registry.register(Arc::new(AuthService::new()));
    registry.register(Arc::new(SessionService::new()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_each_service_exactly_once() {
        let registry = ServiceRegistry::new();
        register_services(&registry);
        let count = registry.len();

        // Re-registering must not duplicate bindings.
        register_services(&registry);
        assert_eq!(registry.len(), count);

        registry.get::<AuthService>().unwrap();
        registry.get::<SessionService>().unwrap();
    }
}
