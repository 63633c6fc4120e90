use alloc::string::String;

use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveErrorKind {
    #[error("Invalid dependency: {name}")]
    NoInjector { name: String },
    #[error("Dependency at position {position} wasn't resolved")]
    NoDependency { position: usize },
    #[error("Incorrect injector type. Actual: {actual}, expected: {expected}")]
    IncorrectType { expected: TypeInfo, actual: TypeInfo },
}
