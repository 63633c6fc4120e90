use super::{ArgumentErrorKind, ResolveErrorKind, SignatureErrorKind};

#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error(transparent)]
    Signature(#[from] SignatureErrorKind),
    #[error(transparent)]
    Resolve(#[from] ResolveErrorKind),
    #[error(transparent)]
    Argument(#[from] ArgumentErrorKind),
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
