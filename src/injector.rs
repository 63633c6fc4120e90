use core::fmt::{self, Debug, Formatter};

use crate::{
    any::TypeInfo,
    errors::ResolveErrorKind,
    utils::thread_safety::{RcAnyThreadSafety, RcThreadSafety, SendSafety, SyncSafety},
};

/// A registered value eligible for injection.
///
/// Cloning an injector clones the pointer, the value itself is shared between
/// the registry and every instance it was injected into.
#[derive(Clone)]
pub struct Injector {
    type_info: TypeInfo,
    value: RcAnyThreadSafety,
}

impl Injector {
    #[inline]
    #[must_use]
    pub fn new<T: SendSafety + SyncSafety + 'static>(value: T) -> Self {
        Self::from_rc(RcThreadSafety::new(value))
    }

    #[inline]
    #[must_use]
    pub fn from_rc<T: SendSafety + SyncSafety + 'static>(value: RcThreadSafety<T>) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            value,
        }
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns the shared value if it was registered as `T`.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::IncorrectType`] if the injector holds another type.
    pub fn downcast<T: SendSafety + SyncSafety + 'static>(&self) -> Result<RcThreadSafety<T>, ResolveErrorKind> {
        self.value.clone().downcast().map_err(|_| ResolveErrorKind::IncorrectType {
            expected: TypeInfo::of::<T>(),
            actual: self.type_info,
        })
    }

    /// Returns `true` if both injectors point to the same value.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        RcThreadSafety::ptr_eq(&self.value, &other.value)
    }
}

impl Debug for Injector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injector").field("type", &self.type_info.name).finish_non_exhaustive()
    }
}

impl<T: SendSafety + SyncSafety + 'static> From<RcThreadSafety<T>> for Injector {
    #[inline]
    fn from(value: RcThreadSafety<T>) -> Self {
        Self::from_rc(value)
    }
}
