use alloc::{collections::BTreeMap, sync::Arc};
use core::fmt::{self, Debug, Formatter};

use super::errors::{BindingErrorKind, ResolveErrorKind};
use crate::{any::TypeInfo, instance::Instance};

pub(crate) type BoxedUpcast = Arc<dyn Fn(Instance) -> Result<Instance, ResolveErrorKind> + Send + Sync>;

/// Declared mapping from a requested type to the type that is constructed for it.
/// `target` is `None` for self-bindings.
#[derive(Clone)]
pub struct Binding {
    source: TypeInfo,
    target: Option<TypeInfo>,
    upcast: Option<BoxedUpcast>,
}

impl Binding {
    #[inline]
    #[must_use]
    pub const fn new(source: TypeInfo, target: Option<TypeInfo>) -> Self {
        Self {
            source,
            target,
            upcast: None,
        }
    }

    /// Creates a binding that converts the constructed `Target` into `Arc<Source>`,
    /// so the instance can be requested as the source type (usually a trait object).
    #[must_use]
    pub fn with_upcast<Source, Target>(upcast: fn(Arc<Target>) -> Arc<Source>) -> Self
    where
        Source: ?Sized + Send + Sync + 'static,
        Target: Send + Sync + 'static,
    {
        Self {
            source: TypeInfo::of::<Source>(),
            target: Some(TypeInfo::of::<Target>()),
            upcast: Some(Arc::new(move |instance: Instance| match instance.downcast::<Target>() {
                Some(target) => Ok(Instance::new(upcast(target))),
                None => Err(ResolveErrorKind::IncorrectType {
                    expected: TypeInfo::of::<Target>().name,
                    actual: instance.type_info().name,
                }),
            })),
        }
    }

    #[inline]
    #[must_use]
    pub const fn source(&self) -> TypeInfo {
        self.source
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<TypeInfo> {
        self.target
    }

    /// Type that is actually constructed for the binding
    #[inline]
    #[must_use]
    pub fn resolved_target(&self) -> TypeInfo {
        self.target.unwrap_or(self.source)
    }

    pub(crate) fn upcast(&self, instance: Instance) -> Result<Instance, ResolveErrorKind> {
        match &self.upcast {
            Some(upcast) => upcast(instance),
            None => Ok(instance),
        }
    }
}

impl Debug for Binding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("upcast", &self.upcast.is_some())
            .finish()
    }
}

#[derive(Default, Clone)]
pub(crate) struct Bindings {
    map: BTreeMap<TypeInfo, Binding>,
}

impl Bindings {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    pub(crate) fn insert(&mut self, binding: Binding) -> Result<(), BindingErrorKind> {
        use alloc::collections::btree_map::Entry::{Occupied, Vacant};

        match self.map.entry(binding.source) {
            Vacant(entry) => {
                entry.insert(binding);
                Ok(())
            }
            Occupied(entry) => Err(BindingErrorKind::AlreadyExists { name: entry.key().name }),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, source: &TypeInfo) -> Option<&Binding> {
        self.map.get(source)
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, source: &TypeInfo) -> bool {
        self.map.contains_key(source)
    }

    #[inline]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn sources(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.map.keys().copied()
    }
}
