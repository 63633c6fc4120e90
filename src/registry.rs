use alloc::{collections::BTreeMap, string::String};
use tracing::{debug, debug_span, warn};

use crate::{
    injector::Injector,
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
};

/// Registered injectors by name
pub type Injectors = BTreeMap<String, Injector>;

#[derive(Default, Clone, Debug)]
pub struct Registry {
    injectors: Injectors,
}

impl Registry {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { injectors: BTreeMap::new() }
    }

    #[inline]
    #[must_use]
    pub fn provide<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: SendSafety + SyncSafety + 'static,
    {
        self.register(name.into(), Injector::new(value));
        self
    }

    #[inline]
    #[must_use]
    pub fn provide_rc<T>(mut self, name: impl Into<String>, value: RcThreadSafety<T>) -> Self
    where
        T: SendSafety + SyncSafety + 'static,
    {
        self.register(name.into(), Injector::from_rc(value));
        self
    }
}

impl Registry {
    /// Registers the injector under the name, replacing and returning the previous one
    pub(crate) fn register(&mut self, name: String, injector: Injector) -> Option<Injector> {
        if name.is_empty() {
            warn!("Injector registered with empty name can't be referenced by a dependency");
        }

        let span = debug_span!("register", name = name.as_str(), injector = injector.type_info().short_name());
        let _guard = span.enter();

        let previous = self.injectors.insert(name, injector);
        match &previous {
            Some(previous) => debug!(previous = previous.type_info().short_name(), "Injector replaced"),
            None => debug!("Injector registered"),
        }
        previous
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Injector> {
        self.injectors.get(name)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.injectors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.injectors.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn injectors(&self) -> &Injectors {
        &self.injectors
    }

    #[inline]
    #[must_use]
    pub(crate) fn injectors_mut(&mut self) -> &mut Injectors {
        &mut self.injectors
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::Registry;
    use crate::utils::thread_safety::RcThreadSafety;

    use alloc::{
        format,
        string::{String, ToString as _},
    };
    use tracing_test::traced_test;

    struct Logger;

    #[test]
    fn test_build_empty() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.get("logger").is_none());
    }

    #[test]
    #[traced_test]
    fn test_provide_replaces() {
        let registry = Registry::new().provide("port", 8080u16).provide("port", 9090u16);

        assert_eq!(registry.len(), 1);
        assert_eq!(*registry.get("port").unwrap().downcast::<u16>().unwrap(), 9090);
        assert!(logs_contain("Injector replaced"));
    }

    #[test]
    fn test_provide_rc_shares_value() {
        let logger = RcThreadSafety::new(Logger);
        let registry = Registry::new().provide_rc("logger", logger.clone());

        let injected = registry.get("logger").unwrap().downcast::<Logger>().unwrap();
        assert!(RcThreadSafety::ptr_eq(&injected, &logger));
    }

    #[test]
    #[traced_test]
    fn test_provide_empty_name() {
        let registry = Registry::new().provide("", 1u8);

        assert_eq!(registry.len(), 1);
        assert!(logs_contain("empty name"));
    }
}
