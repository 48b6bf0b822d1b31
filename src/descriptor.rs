use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Debug, Formatter};

use super::{
    config::Config,
    dependency_resolver::Dependencies,
    errors::InstantiateErrorKind,
    instantiator::{boxed_instantiator, BoxedInstantiator, Instantiator},
};
use crate::{any::TypeInfo, instance::Instance};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Concrete,
    Abstract,
    Interface,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
}

impl Visibility {
    /// Only public and internal constructors can be called by the container
    #[inline]
    #[must_use]
    pub const fn is_accessible(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Internal)
    }
}

#[derive(Clone)]
pub struct Constructor {
    parameters: Box<[TypeInfo]>,
    visibility: Visibility,
    inject: bool,
    pub(crate) instantiator: BoxedInstantiator,
}

impl Constructor {
    /// Creates a public constructor, not marked for injection.
    /// Parameters are taken from the argument types of the instantiator.
    #[inline]
    #[must_use]
    pub fn new<Inst, Deps>(instantiator: Inst) -> Self
    where
        Inst: Instantiator<Deps, Error = InstantiateErrorKind>,
        Deps: Dependencies + 'static,
    {
        Self {
            parameters: Deps::parameters().into_boxed_slice(),
            visibility: Visibility::default(),
            inject: false,
            instantiator: boxed_instantiator(instantiator),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Marks the constructor as the one the container should prefer among several
    #[inline]
    #[must_use]
    pub fn inject(mut self) -> Self {
        self.inject = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[TypeInfo] {
        &self.parameters
    }

    #[inline]
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    #[must_use]
    pub const fn is_inject(&self) -> bool {
        self.inject
    }

    #[inline]
    #[must_use]
    pub fn is_parameterless(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Debug for Constructor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("parameters", &self.parameters)
            .field("visibility", &self.visibility)
            .field("inject", &self.inject)
            .finish_non_exhaustive()
    }
}

/// Statically declared metadata of a registrable type
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    type_info: TypeInfo,
    kind: TypeKind,
    constructors: Vec<Constructor>,
    config: Config,
    object: Option<Instance>,
}

impl TypeDescriptor {
    #[inline]
    #[must_use]
    pub fn new<T: ?Sized + 'static>(kind: TypeKind) -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            kind,
            constructors: Vec::new(),
            config: Config::default(),
            object: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn concrete<T: 'static>() -> Self {
        Self::new::<T>(TypeKind::Concrete)
    }

    #[inline]
    #[must_use]
    pub fn interface<T: ?Sized + 'static>() -> Self {
        Self::new::<T>(TypeKind::Interface)
    }

    /// Describes a type with exactly one globally shared value that requires no construction.
    /// The value is returned as is on every resolution, bypassing constructor selection and the singleton cache.
    #[inline]
    #[must_use]
    pub fn object<T: Send + Sync + 'static>(value: T) -> Self {
        Self {
            object: Some(Instance::from_value(value)),
            ..Self::new::<T>(TypeKind::Concrete)
        }
    }

    #[inline]
    #[must_use]
    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructors.push(constructor);
        self
    }

    #[inline]
    #[must_use]
    pub fn singleton(mut self) -> Self {
        self.config.singleton = true;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    #[inline]
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.kind == TypeKind::Abstract
    }

    #[inline]
    #[must_use]
    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> Config {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn object_instance(&self) -> Option<&Instance> {
        self.object.as_ref()
    }
}

/// Type that knows its own descriptor, the replacement for runtime reflection
pub trait Injectable: 'static {
    fn descriptor() -> TypeDescriptor;
}
