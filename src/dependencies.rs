use alloc::{collections::VecDeque, string::String, vec::Vec};

use crate::{
    errors::ResolveErrorKind,
    injector::Injector,
    utils::thread_safety::{RcThreadSafety, SendSafety, SyncSafety},
};

/// Resolved dependencies passed to a class constructor in declaration order.
///
/// Unresolved dependency references are absent in permissive mode,
/// so the dependencies after them are shifted to the left.
#[derive(Debug, Clone, Default)]
pub struct Dependencies {
    injectors: VecDeque<(String, Injector)>,
    position: usize,
}

impl Dependencies {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            injectors: VecDeque::new(),
            position: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, name: String, injector: Injector) {
        self.injectors.push_back((name, injector));
    }

    /// Count of dependencies not taken yet
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

    /// Injector names of dependencies not taken yet
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.injectors.iter().map(|(name, _)| name.as_str())
    }

    /// Takes the next dependency.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NoDependency`] if all dependencies are taken
    /// - Returns [`ResolveErrorKind::IncorrectType`] if the next injector isn't `T`.
    ///   The dependency isn't taken in this case.
    pub fn next<T: SendSafety + SyncSafety + 'static>(&mut self) -> Result<RcThreadSafety<T>, ResolveErrorKind> {
        let Some((_, injector)) = self.injectors.front() else {
            return Err(ResolveErrorKind::NoDependency { position: self.position });
        };
        let dependency = injector.downcast()?;

        self.injectors.pop_front();
        self.position += 1;
        Ok(dependency)
    }

    /// Takes the next dependency if it's registered as `T`, otherwise leaves it in place.
    /// Useful for constructors that accept optional dependencies.
    pub fn next_if<T: SendSafety + SyncSafety + 'static>(&mut self) -> Option<RcThreadSafety<T>> {
        self.next().ok()
    }

    /// Takes the next dependency without checking its type
    pub fn next_injector(&mut self) -> Option<Injector> {
        let (_, injector) = self.injectors.pop_front()?;
        self.position += 1;
        Some(injector)
    }

    /// Takes all remaining dependencies
    pub fn into_injectors(self) -> Vec<Injector> {
        self.injectors.into_iter().map(|(_, injector)| injector).collect()
    }
}
