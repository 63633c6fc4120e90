use alloc::{boxed::Box, collections::VecDeque, vec::Vec};
use core::{
    any::{Any, TypeId},
    fmt::{self, Debug, Formatter},
};

use crate::{any::TypeInfo, errors::ArgumentErrorKind};

/// Ordered caller-supplied values passed to the initializer of a class.
///
/// Converts from tuples, so `()` means no arguments and `(1, "two")` two arguments.
#[derive(Default)]
pub struct Arguments {
    values: VecDeque<(TypeInfo, Box<dyn Any>)>,
    position: usize,
}

impl Arguments {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: VecDeque::new(),
            position: 0,
        }
    }

    #[inline]
    pub fn push<T: 'static>(&mut self, value: T) {
        self.values.push_back((TypeInfo::of::<T>(), Box::new(value)));
    }

    #[inline]
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Count of arguments not taken yet
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Takes the next argument.
    ///
    /// # Errors
    /// - Returns [`ArgumentErrorKind::NoArgument`] if all arguments are taken
    /// - Returns [`ArgumentErrorKind::IncorrectType`] if the next argument isn't `T`.
    ///   The argument isn't taken in this case.
    pub fn next<T: 'static>(&mut self) -> Result<T, ArgumentErrorKind> {
        let position = self.position;
        let Some((type_info, _)) = self.values.front() else {
            return Err(ArgumentErrorKind::NoArgument { position });
        };
        if type_info.id != TypeId::of::<T>() {
            return Err(ArgumentErrorKind::IncorrectType {
                position,
                expected: TypeInfo::of::<T>(),
                actual: *type_info,
            });
        }

        match self.next_any().map(|value| value.downcast::<T>()) {
            Some(Ok(value)) => Ok(*value),
            _ => Err(ArgumentErrorKind::NoArgument { position }),
        }
    }

    /// Takes the next argument without checking its type
    pub fn next_any(&mut self) -> Option<Box<dyn Any>> {
        let (_, value) = self.values.pop_front()?;
        self.position += 1;
        Some(value)
    }

    /// Types of arguments not taken yet
    pub fn type_infos(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.values.iter().map(|(type_info, _)| *type_info)
    }
}

impl Debug for Arguments {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.type_infos().map(|type_info| type_info.name)).finish()
    }
}

impl<T: 'static> From<Vec<T>> for Arguments {
    fn from(values: Vec<T>) -> Self {
        let mut arguments = Self::new();
        for value in values {
            arguments.push(value);
        }
        arguments
    }
}

macro_rules! impl_from_tuple {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<$($ty: 'static,)*> From<($($ty,)*)> for Arguments {
            #[inline]
            #[allow(unused_mut)]
            fn from(($($ty,)*): ($($ty,)*)) -> Self {
                let mut arguments = Self::new();
                $( arguments.push($ty); )*
                arguments
            }
        }
    };
}

all_the_tuples!(impl_from_tuple);

#[cfg(test)]
mod tests {
    use super::Arguments;
    use crate::{any::TypeInfo, errors::ArgumentErrorKind};

    use alloc::{string::String, vec};

    #[test]
    fn test_from_tuple() {
        let mut arguments = Arguments::from((1u8, String::from("two"), 3.0f32));

        assert_eq!(arguments.len(), 3);
        assert_eq!(arguments.next::<u8>().unwrap(), 1);
        assert_eq!(arguments.next::<String>().unwrap(), "two");
        assert_eq!(arguments.next::<f32>().unwrap(), 3.0);
        assert_eq!(arguments.next::<u8>().unwrap_err(), ArgumentErrorKind::NoArgument { position: 3 });
    }

    #[test]
    fn test_from_unit() {
        let arguments = Arguments::from(());
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_from_vec() {
        let mut arguments = Arguments::from(vec![1i32, 2, 3]);

        assert_eq!(arguments.next::<i32>().unwrap(), 1);
        assert_eq!(arguments.next::<i32>().unwrap(), 2);
        assert_eq!(arguments.next::<i32>().unwrap(), 3);
        assert!(arguments.is_empty());
    }

    #[test]
    fn test_incorrect_type_keeps_argument() {
        let mut arguments = Arguments::new().with(1u8);

        assert_eq!(
            arguments.next::<u16>().unwrap_err(),
            ArgumentErrorKind::IncorrectType {
                position: 0,
                expected: TypeInfo::of::<u16>(),
                actual: TypeInfo::of::<u8>(),
            }
        );
        assert_eq!(arguments.next::<u8>().unwrap(), 1);
    }
}
