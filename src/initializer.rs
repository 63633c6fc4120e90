use alloc::boxed::Box;

use crate::{
    arguments::Arguments,
    errors::InstantiateErrorKind,
    utils::thread_safety::{SendSafety, SyncSafety},
};

/// Instance-level hook called after construction with the caller-supplied arguments.
///
/// Implemented for closures `FnMut(&mut T, Arguments) -> Result<(), E>` where `E: Into<InstantiateErrorKind>`.
/// As with [`Constructor`](crate::Constructor), each instantiation calls a fresh clone.
pub trait Initializer<T>: Clone + 'static {
    type Error: Into<InstantiateErrorKind>;

    fn initialize(&mut self, instance: &mut T, arguments: Arguments) -> Result<(), Self::Error>;
}

impl<F, T, Err> Initializer<T> for F
where
    F: FnMut(&mut T, Arguments) -> Result<(), Err> + Clone + 'static,
    Err: Into<InstantiateErrorKind>,
{
    type Error = Err;

    #[inline]
    fn initialize(&mut self, instance: &mut T, arguments: Arguments) -> Result<(), Self::Error> {
        self(instance, arguments)
    }
}

pub(crate) trait CloneInitializer<T>: SendSafety + SyncSafety {
    fn call(&mut self, instance: &mut T, arguments: Arguments) -> Result<(), InstantiateErrorKind>;

    #[must_use]
    fn clone_box(&self) -> Box<dyn CloneInitializer<T>>;
}

impl<T, I> CloneInitializer<T> for I
where
    I: Initializer<T> + SendSafety + SyncSafety,
{
    #[inline]
    fn call(&mut self, instance: &mut T, arguments: Arguments) -> Result<(), InstantiateErrorKind> {
        self.initialize(instance, arguments).map_err(Into::into)
    }

    #[inline]
    fn clone_box(&self) -> Box<dyn CloneInitializer<T>> {
        Box::new(self.clone())
    }
}

pub(crate) struct BoxCloneInitializer<T>(pub(crate) Box<dyn CloneInitializer<T>>);

impl<T> Clone for BoxCloneInitializer<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone_box())
    }
}

#[must_use]
pub(crate) fn boxed_initializer<T, I>(initializer: I) -> BoxCloneInitializer<T>
where
    I: Initializer<T> + SendSafety + SyncSafety,
{
    BoxCloneInitializer(Box::new(initializer))
}
