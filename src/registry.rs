use alloc::collections::BTreeMap;

use crate::{
    any::TypeInfo,
    descriptor::{Injectable, TypeDescriptor},
};

/// Descriptor table: metadata of every type the container is able to reason about
#[derive(Default, Clone)]
pub struct Registry {
    descriptors: BTreeMap<TypeInfo, TypeDescriptor>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn add(mut self, descriptor: TypeDescriptor) -> Self {
        self.add_descriptor(descriptor);
        self
    }

    #[inline]
    #[must_use]
    pub fn add_injectable<T: Injectable>(self) -> Self {
        self.add(T::descriptor())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, type_info: &TypeInfo) -> Option<&TypeDescriptor> {
        self.descriptors.get(type_info)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Registry {
    /// Replaces the previous descriptor of the same type, if any
    #[inline]
    pub(crate) fn add_descriptor(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        self.descriptors.insert(descriptor.type_info(), descriptor)
    }
}

impl FromIterator<TypeDescriptor> for Registry {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), Self::add)
    }
}
