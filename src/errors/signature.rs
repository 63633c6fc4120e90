use alloc::string::String;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureErrorKind {
    #[error("Unparsable signature `{declaration}`: parameter list not found")]
    NoParameterList { declaration: String },
    #[error("Unparsable signature `{declaration}`: parameter list isn't closed")]
    UnclosedParameterList { declaration: String },
    #[error("Unparsable signature `{declaration}`: invalid name `{name}`")]
    InvalidName { declaration: String, name: String },
    #[error("Unparsable signature `{declaration}`: parameter at position {position} is empty")]
    EmptyParameter { declaration: String, position: usize },
    #[error("Unparsable signature `{declaration}`: invalid parameter `{param}`")]
    InvalidParameter { declaration: String, param: String },
}
