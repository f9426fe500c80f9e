//! Service registry - a capability lookup keyed by type.
//!
//! Each application instance owns exactly one registry; nothing here is
//! process-global. Bindings map a type to either a constructed instance or
//! a factory closure evaluated lazily on first access. Factory results are
//! cached, so a factory binding behaves as a singleton within its registry.
//!
//! Lookup is total: asking for an unregistered type is an error, never a
//! silent default.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// Errors from registry lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No binding exists for the requested type.
    #[error("no service registered for type {type_name}")]
    NotRegistered {
        /// The type that was requested.
        type_name: &'static str,
    },
}

type BoxedAny = Box<dyn Any + Send + Sync>;
type BoxedFactory = Box<dyn Fn() -> BoxedAny + Send + Sync>;

enum Binding {
    Instance(BoxedAny),
    Factory(BoxedFactory),
}

/// A capability lookup mapping types to instances or factories.
///
/// Supports both concrete types and trait objects:
///
/// ```
/// use std::sync::Arc;
/// use wharf_core::ServiceRegistry;
///
/// let registry = ServiceRegistry::new();
/// registry.register(Arc::new(42_u32));
/// assert_eq!(*registry.get::<u32>().unwrap(), 42);
/// ```
#[derive(Default)]
pub struct ServiceRegistry {
    bindings: RwLock<HashMap<TypeId, Binding>>,
}

impl ServiceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the binding for `T`.
    ///
    /// Last registration wins; the registry holds exactly one entry per
    /// type.
    pub fn register<T>(&self, value: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let replaced = self
            .write_lock()
            .insert(TypeId::of::<T>(), Binding::Instance(Box::new(value)))
            .is_some();
        tracing::debug!(
            target: "wharf.registry",
            service = std::any::type_name::<T>(),
            replaced,
            "registered service"
        );
    }

    /// Bind a factory for `T`, evaluated lazily on first [`get`](Self::get).
    ///
    /// The constructed instance replaces the factory binding, so every
    /// later `get` returns the same `Arc`.
    pub fn register_factory<T, F>(&self, factory: F)
    where
        T: ?Sized + Send + Sync + 'static,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        let boxed: BoxedFactory = Box::new(move || Box::new(factory()) as BoxedAny);
        let replaced = self
            .write_lock()
            .insert(TypeId::of::<T>(), Binding::Factory(boxed))
            .is_some();
        tracing::debug!(
            target: "wharf.registry",
            service = std::any::type_name::<T>(),
            replaced,
            "registered service factory"
        );
    }

    /// Retrieve the binding for `T`.
    ///
    /// Constructs and caches the instance if the binding is factory-based.
    /// Fails with [`RegistryError::NotRegistered`] when no binding exists.
    pub fn get<T>(&self) -> Result<Arc<T>, RegistryError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = TypeId::of::<T>();

        // Fast path: already-constructed instance under the read lock.
        {
            let bindings = self.read_lock();
            if let Some(Binding::Instance(boxed)) = bindings.get(&key) {
                return Ok(clone_instance::<T>(boxed));
            }
        }

        // Slow path: construct from the factory under the write lock.
        // Re-check the binding: another caller may have constructed it
        // between lock acquisitions.
        let mut bindings = self.write_lock();
        match bindings.get(&key) {
            Some(Binding::Instance(boxed)) => Ok(clone_instance::<T>(boxed)),
            Some(Binding::Factory(factory)) => {
                let built = factory();
                let instance = clone_instance::<T>(&built);
                bindings.insert(key, Binding::Instance(built));
                tracing::debug!(
                    target: "wharf.registry",
                    service = std::any::type_name::<T>(),
                    "constructed service from factory"
                );
                Ok(instance)
            }
            None => Err(RegistryError::NotRegistered {
                type_name: std::any::type_name::<T>(),
            }),
        }
    }

    /// Whether a binding exists for `T`.
    #[must_use]
    pub fn contains<T>(&self) -> bool
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.read_lock().contains_key(&TypeId::of::<T>())
    }

    /// Number of registered bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    /// Whether the registry holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, HashMap<TypeId, Binding>> {
        self.bindings
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<TypeId, Binding>> {
        self.bindings
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("bindings", &self.len())
            .finish()
    }
}

/// Clone the `Arc<T>` stored inside a binding.
///
/// Bindings are only ever inserted under `TypeId::of::<T>()` with an
/// `Arc<T>` payload, so the downcast cannot fail.
fn clone_instance<T>(boxed: &BoxedAny) -> Arc<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    boxed
        .downcast_ref::<Arc<T>>()
        .expect("registry invariant: binding payload matches its type key")
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq, Eq)]
    struct Widget(&'static str);

    trait Greeter: Send + Sync {
        fn greet(&self) -> &'static str;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> &'static str {
            "hello"
        }
    }

    #[test]
    fn get_after_register_returns_value() {
        let registry = ServiceRegistry::new();
        registry.register(Arc::new(Widget("a")));

        let widget = registry.get::<Widget>().unwrap();
        assert_eq!(*widget, Widget("a"));
    }

    #[test]
    fn get_on_unregistered_type_fails() {
        let registry = ServiceRegistry::new();
        let err = registry.get::<Widget>().unwrap_err();
        assert!(matches!(err, RegistryError::NotRegistered { .. }));
    }

    #[test]
    fn re_registration_overwrites() {
        let registry = ServiceRegistry::new();
        registry.register(Arc::new(Widget("v1")));
        registry.register(Arc::new(Widget("v2")));

        assert_eq!(*registry.get::<Widget>().unwrap(), Widget("v2"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn factory_is_lazy_and_constructs_once() {
        static CALLS: AtomicUsize = AtomicUsize::new(0);

        let registry = ServiceRegistry::new();
        registry.register_factory::<Widget, _>(|| {
            CALLS.fetch_add(1, Ordering::SeqCst);
            Arc::new(Widget("built"))
        });
        assert_eq!(CALLS.load(Ordering::SeqCst), 0);

        let first = registry.get::<Widget>().unwrap();
        let second = registry.get::<Widget>().unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn trait_objects_are_registrable() {
        let registry = ServiceRegistry::new();
        let greeter: Arc<dyn Greeter> = Arc::new(English);
        registry.register(greeter);

        let resolved = registry.get::<dyn Greeter>().unwrap();
        assert_eq!(resolved.greet(), "hello");
    }

    #[test]
    fn contains_tracks_registrations() {
        let registry = ServiceRegistry::new();
        assert!(!registry.contains::<Widget>());
        assert!(registry.is_empty());

        registry.register(Arc::new(Widget("a")));
        assert!(registry.contains::<Widget>());
        assert!(!registry.contains::<u32>());
    }
}
