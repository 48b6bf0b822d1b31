#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod binding;
pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod dependency_resolver;
pub(crate) mod descriptor;
pub(crate) mod errors;
pub(crate) mod instance;
pub(crate) mod instantiator;
pub(crate) mod registry;
pub(crate) mod registry_macros;
pub(crate) mod selector;

pub use any::TypeInfo;
pub use binding::Binding;
pub use config::Config;
pub use container::Container;
pub use dependency_resolver::{DependencyResolver, Dependencies};
pub use descriptor::{Constructor, Injectable, TypeDescriptor, TypeKind, Visibility};
pub use errors::{
    BindingErrorKind, CircularDependency, InstantiateErrorKind, InstantiatorErrorKind, NotInstantiableReason, ResolveErrorKind, SelectErrorKind,
};
pub use instance::Instance;
pub use instantiator::Instantiator;
pub use registry::Registry;
pub use selector::{ConstructorSelector, DefaultConstructorSelector};
