use crate::{
    any::TypeInfo,
    constructor::{boxed_constructor, BoxCloneConstructor, Constructor},
    errors::SignatureErrorKind,
    initializer::{boxed_initializer, BoxCloneInitializer, Initializer},
    signature::Signature,
    utils::thread_safety::{SendSafety, SyncSafety},
};

/// A class-like constructor for `T` with its reflection metadata.
///
/// The [`Signature`] lists which parameters are dependency references,
/// the constructor receives the resolved dependencies,
/// and the optional initializer receives the caller-supplied arguments.
///
/// # Examples
/// ```rust
/// use needle::{Arguments, Class, Container, Dependencies, InstantiateErrorKind, Registry};
/// use std::sync::Arc;
///
/// struct Logger;
///
/// struct Service {
///     logger: Arc<Logger>,
///     retries: u8,
/// }
///
/// let class = Class::new("function Service($logger, retries)", |mut deps: Dependencies| {
///     Ok::<_, InstantiateErrorKind>(Service {
///         logger: deps.next()?,
///         retries: 0,
///     })
/// })
/// .unwrap()
/// .with_initializer(|service: &mut Service, mut args: Arguments| {
///     service.retries = args.next()?;
///     Ok::<_, InstantiateErrorKind>(())
/// });
///
/// let container = Container::new(Registry::new().provide("logger", Logger));
/// let service = container.instantiate(&class, (3u8,)).unwrap();
/// assert_eq!(service.retries, 3);
/// ```
pub struct Class<T> {
    signature: Signature,
    pub(crate) constructor: BoxCloneConstructor<T>,
    pub(crate) initializer: Option<BoxCloneInitializer<T>>,
}

impl<T: 'static> Class<T> {
    /// Creates a class from its textual declaration.
    ///
    /// # Errors
    /// Returns [`SignatureErrorKind`] if the declaration can't be parsed.
    pub fn new<C>(declaration: &str, constructor: C) -> Result<Self, SignatureErrorKind>
    where
        C: Constructor<T> + SendSafety + SyncSafety,
    {
        Ok(Self::with_signature(Signature::parse(declaration)?, constructor))
    }

    #[inline]
    #[must_use]
    pub fn with_signature<C>(signature: Signature, constructor: C) -> Self
    where
        C: Constructor<T> + SendSafety + SyncSafety,
    {
        Self {
            signature,
            constructor: boxed_constructor(constructor),
            initializer: None,
        }
    }

    /// Sets the initializer, replacing the previous one
    #[inline]
    #[must_use]
    pub fn with_initializer<I>(mut self, initializer: I) -> Self
    where
        I: Initializer<T> + SendSafety + SyncSafety,
    {
        self.initializer = Some(boxed_initializer(initializer));
        self
    }

    #[inline]
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Declared name of the class, or the short name of `T` if the declaration is anonymous
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.signature.name().unwrap_or_else(|| self.type_info().short_name())
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    #[inline]
    #[must_use]
    pub const fn has_initializer(&self) -> bool {
        self.initializer.is_some()
    }
}

impl<T> Clone for Class<T> {
    fn clone(&self) -> Self {
        Self {
            signature: self.signature.clone(),
            constructor: self.constructor.clone(),
            initializer: self.initializer.clone(),
        }
    }
}

/// Type with a class attached, instantiated with [`crate::Container::make`]
pub trait Injectable: Sized + 'static {
    /// # Errors
    /// Returns [`SignatureErrorKind`] if the declaration of the class can't be parsed.
    fn class() -> Result<Class<Self>, SignatureErrorKind>;
}
