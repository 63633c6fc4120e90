mod argument;
mod instantiate;
mod resolve;
mod signature;

pub use argument::ArgumentErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use resolve::ResolveErrorKind;
pub use signature::SignatureErrorKind;
