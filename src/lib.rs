#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod arguments;
pub(crate) mod class;
pub(crate) mod config;
pub(crate) mod constructor;
pub(crate) mod container;
pub(crate) mod dependencies;
pub(crate) mod errors;
pub(crate) mod initializer;
pub(crate) mod injector;
pub(crate) mod registry;
pub(crate) mod signature;

pub mod utils;

pub use any::TypeInfo;
pub use arguments::Arguments;
pub use class::{Class, Injectable};
pub use config::Config;
pub use constructor::Constructor;
pub use container::Container;
pub use dependencies::Dependencies;
pub use errors::{ArgumentErrorKind, InstantiateErrorKind, ResolveErrorKind, SignatureErrorKind};
pub use initializer::Initializer;
pub use injector::Injector;
pub use registry::{Injectors, Registry};
pub use signature::{Param, Signature, SIGIL};
