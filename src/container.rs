use alloc::string::{String, ToString as _};
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};
use tracing::{debug, error, info_span};

use crate::{
    arguments::Arguments,
    class::{Class, Injectable},
    config::Config,
    dependencies::Dependencies,
    errors::{InstantiateErrorKind, ResolveErrorKind},
    injector::Injector,
    registry::{Injectors, Registry},
    signature::Signature,
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
};

/// Owns the injector registry and instantiates classes with their dependencies.
///
/// Clones share the same registry.
#[derive(Clone)]
pub struct Container {
    inner: RcThreadSafety<ContainerInner>,
}

struct ContainerInner {
    registry: Mutex<Registry>,
    config: Config,
}

impl Default for Container {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

impl Container {
    /// Creates permissive container.
    /// Dependencies without registered injectors are logged and skipped.
    #[inline]
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::with_config(registry, Config::default())
    }

    #[inline]
    #[must_use]
    pub fn with_config(registry: Registry, config: Config) -> Self {
        Self {
            inner: RcThreadSafety::new(ContainerInner {
                registry: Mutex::new(registry),
                config,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> Config {
        self.inner.config
    }

    /// Registers the value under the name, replacing the previous injector with the same name.
    /// Returns the replaced injector.
    #[inline]
    pub fn register_injector<T>(&self, name: impl Into<String>, value: T) -> Option<Injector>
    where
        T: SendSafety + SyncSafety + 'static,
    {
        self.inner.registry.lock().register(name.into(), Injector::new(value))
    }

    /// Registers the shared value under the name, replacing the previous injector with the same name.
    /// The value isn't copied, instances receive the same pointer.
    #[inline]
    pub fn register_injector_rc<T>(&self, name: impl Into<String>, value: RcThreadSafety<T>) -> Option<Injector>
    where
        T: SendSafety + SyncSafety + 'static,
    {
        self.inner.registry.lock().register(name.into(), Injector::from_rc(value))
    }

    /// Returns the live mapping of registered injectors.
    /// Changes made through the guard change the registry.
    ///
    /// # Warning
    /// The guard locks the registry, drop it before registering or instantiating with this container.
    #[inline]
    #[must_use]
    pub fn get_injectors(&self) -> MappedMutexGuard<'_, Injectors> {
        MutexGuard::map(self.inner.registry.lock(), Registry::injectors_mut)
    }

    #[inline]
    #[must_use]
    pub fn get_injector(&self, name: &str) -> Option<Injector> {
        self.inner.registry.lock().get(name).cloned()
    }

    /// Copy of the current registry, detached from the container
    #[inline]
    #[must_use]
    pub fn registry(&self) -> Registry {
        self.inner.registry.lock().clone()
    }

    /// Resolves dependency references of the signature against the registry in declaration order.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::NoInjector`] for an unregistered dependency if the container is strict.
    /// In permissive mode the dependency is logged and skipped.
    pub fn resolve(&self, signature: &Signature) -> Result<Dependencies, ResolveErrorKind> {
        let registry = self.inner.registry.lock();

        let mut dependencies = Dependencies::new();
        for name in signature.dependencies() {
            let Some(injector) = registry.get(name) else {
                let err = ResolveErrorKind::NoInjector { name: name.to_string() };
                error!("{}", err);
                if self.inner.config.strict {
                    return Err(err);
                }
                continue;
            };

            debug!(dependency = name, injector = injector.type_info().short_name(), "Resolved");
            dependencies.push(name.to_string(), injector.clone());
        }

        Ok(dependencies)
    }

    /// Instantiates the class.
    ///
    /// Dependency references of the class signature are resolved against the current registry
    /// and passed to the constructor in declaration order.
    /// If the class has an initializer, it's called with the constructed instance and `arguments`.
    ///
    /// Values are captured at the moment of the call,
    /// so later registrations don't affect the returned instance.
    /// The constructor and initializer are cloned for every call and start from the state stored in the class.
    ///
    /// # Errors
    /// - Returns [`InstantiateErrorKind::Resolve`] for an unregistered dependency if the container is strict
    /// - Returns the error of the constructor or initializer
    pub fn instantiate<T: 'static>(&self, class: &Class<T>, arguments: impl Into<Arguments>) -> Result<T, InstantiateErrorKind> {
        let span = info_span!("instantiate", class = class.name(), instance = class.type_info().short_name());
        let _guard = span.enter();

        let dependencies = self.resolve(class.signature())?;

        let mut instance = match class.constructor.clone().0.call(dependencies) {
            Ok(instance) => instance,
            Err(err) => {
                error!("{}", err);
                return Err(err);
            }
        };
        debug!("Constructed");

        let Some(initializer) = &class.initializer else {
            return Ok(instance);
        };
        let arguments = arguments.into();
        debug!(arguments = arguments.len(), "Initializing");

        if let Err(err) = initializer.clone().0.call(&mut instance, arguments) {
            error!("{}", err);
            return Err(err);
        }
        debug!("Initialized");

        Ok(instance)
    }

    /// Instantiates the class attached to `T`.
    ///
    /// # Errors
    /// - Returns [`InstantiateErrorKind::Signature`] if the declaration of the class can't be parsed
    /// - Returns errors of [`Self::instantiate`]
    pub fn make<T: Injectable>(&self, arguments: impl Into<Arguments>) -> Result<T, InstantiateErrorKind> {
        let class = match T::class() {
            Ok(class) => class,
            Err(err) => {
                error!("{}", err);
                return Err(err.into());
            }
        };
        self.instantiate(&class, arguments)
    }
}
