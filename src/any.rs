use core::{
    any::{type_name, TypeId},
    fmt::{self, Display, Formatter},
};

/// Name and id of a type, kept next to type-erased injectors and arguments.
/// Compared by id only, the name is for logs and errors.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Type of the value, used to check that an instance is of the class type
    #[inline]
    #[must_use]
    pub fn of_val<T>(_val: &T) -> Self
    where
        T: ?Sized + 'static,
    {
        Self::of::<T>()
    }

    /// Type name without its module path, `Service` for `app::service::Service`
    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit_once("::").map_or(self.name, |(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::TypeInfo;

    struct Logger;

    #[test]
    fn test_short_name() {
        let type_info = TypeInfo::of::<Logger>();
        assert_eq!(type_info.short_name(), "Logger");
        assert!(type_info.name.ends_with("::Logger"));
    }

    #[test]
    fn test_eq_by_id() {
        assert_eq!(TypeInfo::of::<Logger>(), TypeInfo::of_val(&Logger));
        assert_ne!(TypeInfo::of::<Logger>(), TypeInfo::of::<u8>());
    }
}
