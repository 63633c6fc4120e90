use alloc::boxed::Box;

use crate::{
    dependencies::Dependencies,
    errors::InstantiateErrorKind,
    utils::thread_safety::{SendSafety, SyncSafety},
};

/// Builds an instance from the resolved dependencies of a class.
///
/// Implemented for closures `FnMut(Dependencies) -> Result<T, E>` where `E: Into<InstantiateErrorKind>`.
///
/// Every instantiation calls a fresh clone of the constructor stored in the class,
/// so state mutated by a call isn't seen by the next one.
/// Share state through a captured pointer to keep it between instantiations.
pub trait Constructor<T>: Clone + 'static {
    type Error: Into<InstantiateErrorKind>;

    fn construct(&mut self, dependencies: Dependencies) -> Result<T, Self::Error>;
}

impl<F, T, Err> Constructor<T> for F
where
    F: FnMut(Dependencies) -> Result<T, Err> + Clone + 'static,
    Err: Into<InstantiateErrorKind>,
{
    type Error = Err;

    #[inline]
    fn construct(&mut self, dependencies: Dependencies) -> Result<T, Self::Error> {
        self(dependencies)
    }
}

pub(crate) trait CloneConstructor<T>: SendSafety + SyncSafety {
    fn call(&mut self, dependencies: Dependencies) -> Result<T, InstantiateErrorKind>;

    #[must_use]
    fn clone_box(&self) -> Box<dyn CloneConstructor<T>>;
}

impl<T, C> CloneConstructor<T> for C
where
    C: Constructor<T> + SendSafety + SyncSafety,
{
    #[inline]
    fn call(&mut self, dependencies: Dependencies) -> Result<T, InstantiateErrorKind> {
        self.construct(dependencies).map_err(Into::into)
    }

    #[inline]
    fn clone_box(&self) -> Box<dyn CloneConstructor<T>> {
        Box::new(self.clone())
    }
}

pub(crate) struct BoxCloneConstructor<T>(pub(crate) Box<dyn CloneConstructor<T>>);

impl<T> Clone for BoxCloneConstructor<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

#[must_use]
pub(crate) fn boxed_constructor<T, C>(constructor: C) -> BoxCloneConstructor<T>
where
    C: Constructor<T> + SendSafety + SyncSafety,
{
    BoxCloneConstructor(Box::new(constructor))
}
