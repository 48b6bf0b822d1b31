use alloc::sync::Arc;
use core::{
    any::Any,
    fmt::{self, Debug, Formatter},
};

use crate::any::TypeInfo;

/// Type-erased shared handle to a constructed value.
///
/// The value is stored as `Arc<T>` behind `dyn Any`, which lets trait objects (`Arc<dyn Trait>`)
/// travel through the container the same way concrete types do.
#[derive(Clone)]
pub struct Instance {
    type_info: TypeInfo,
    value: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    #[inline]
    #[must_use]
    pub fn new<T>(value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Self {
            type_info: TypeInfo::of::<T>(),
            value: Arc::new(value),
        }
    }

    #[inline]
    #[must_use]
    pub fn from_value<T: Send + Sync + 'static>(value: T) -> Self {
        Self::new(Arc::new(value))
    }

    /// Type the instance was created with
    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.value.downcast_ref::<Arc<T>>().cloned()
    }

    /// Returns `true` if both handles were cloned from the same instance
    #[inline]
    #[must_use]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.value, &other.value)
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance").field("type", &self.type_info.name).finish_non_exhaustive()
    }
}
