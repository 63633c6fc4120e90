/// Config for a container
/// ## Fields
/// - `strict`:
///   If `true`, a dependency reference without a registered injector aborts instantiation
///   with [`crate::ResolveErrorKind::NoInjector`].
///
///   If `false` (default), the missing dependency is logged and skipped,
///   so the constructor receives the remaining dependencies shifted to the left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub strict: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    #[inline]
    #[must_use]
    pub const fn permissive() -> Self {
        Self { strict: false }
    }
}
