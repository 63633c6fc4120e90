use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentErrorKind {
    #[error("Argument at position {position} not passed")]
    NoArgument { position: usize },
    #[error("Incorrect argument type at position {position}. Actual: {actual}, expected: {expected}")]
    IncorrectType {
        position: usize,
        expected: TypeInfo,
        actual: TypeInfo,
    },
}
