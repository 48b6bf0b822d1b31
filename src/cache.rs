use alloc::collections::BTreeMap;

use crate::{any::TypeInfo, instance::Instance};

/// Constructed singleton instances keyed by their concrete type.
/// Entries are never replaced or removed.
#[derive(Default, Clone)]
pub(crate) struct Cache {
    map: BTreeMap<TypeInfo, Instance>,
}

impl Cache {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, type_info: &TypeInfo) -> Option<Instance> {
        self.map.get(type_info).cloned()
    }

    /// Stores the instance unless the type is already cached.
    /// Returns the instance that ends up in the cache, so the first write wins.
    pub(crate) fn get_or_insert(&mut self, type_info: TypeInfo, instance: Instance) -> Instance {
        self.map.entry(type_info).or_insert(instance).clone()
    }

    #[cfg(test)]
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}
