use alloc::{sync::Arc, vec, vec::Vec};
use core::any::type_name;

use super::errors::ResolveErrorKind;
use crate::{any::TypeInfo, instance::Instance};

/// Single constructor parameter.
///
/// The container resolves [`Self::type_info`] and hands the resulting instance to [`Self::resolve`].
pub trait DependencyResolver: Sized {
    #[must_use]
    fn type_info() -> TypeInfo;

    fn resolve(instance: Instance) -> Result<Self, ResolveErrorKind>;
}

impl<T> DependencyResolver for Arc<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    #[inline]
    fn type_info() -> TypeInfo {
        TypeInfo::of::<T>()
    }

    #[inline]
    fn resolve(instance: Instance) -> Result<Self, ResolveErrorKind> {
        instance.downcast::<T>().ok_or(ResolveErrorKind::IncorrectType {
            expected: type_name::<T>(),
            actual: instance.type_info().name,
        })
    }
}

/// Full parameter list of a constructor, in declaration order
pub trait Dependencies: Sized {
    #[must_use]
    fn parameters() -> Vec<TypeInfo>;

    fn resolve(arguments: Vec<Instance>) -> Result<Self, ResolveErrorKind>;
}

macro_rules! impl_dependencies {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case, unused_mut, unused_variables)]
        impl<$($ty,)*> Dependencies for ($($ty,)*)
        where
            $( $ty: DependencyResolver, )*
        {
            #[inline]
            fn parameters() -> Vec<TypeInfo> {
                vec![$($ty::type_info(),)*]
            }

            fn resolve(arguments: Vec<Instance>) -> Result<Self, ResolveErrorKind> {
                let expected = Self::parameters().len();
                let actual = arguments.len();
                if expected != actual {
                    return Err(ResolveErrorKind::ArgumentsMismatch {
                        name: type_name::<Self>(),
                        expected,
                        actual,
                    });
                }

                let mut arguments = arguments.into_iter();
                Ok(($(
                    $ty::resolve(arguments.next().ok_or(ResolveErrorKind::ArgumentsMismatch {
                        name: type_name::<Self>(),
                        expected,
                        actual,
                    })?)?,
                )*))
            }
        }
    };
}

all_the_tuples!(impl_dependencies);
