/// Builds a [`crate::Registry`] from declarative descriptor entries.
///
/// # Syntax
/// ```text
/// registry! {
///     interface(Type),
///     concrete(Type) [ constructors ],
///     singleton(Type) [ constructors ],
///     abstract_type(Type) [ constructors ],
///     object(Type = value),
/// }
/// ```
/// Constructors are `public(f)`, `internal(f)`, `protected(f)`, `private(f)` or `inject(f)`,
/// where `inject` is a public constructor marked for injection.
///
/// # Examples
/// ```rust
/// use std::sync::Arc;
/// use wirebox::{registry, Container};
///
/// trait Foo: Send + Sync {}
///
/// struct FooImpl;
///
/// impl Foo for FooImpl {}
///
/// struct Bar(Arc<FooImpl>);
///
/// let container = Container::new(registry! {
///     interface(dyn Foo),
///     singleton(FooImpl) [ public(|| Ok(FooImpl)) ],
///     concrete(Bar) [
///         public(|| Ok(Bar(Arc::new(FooImpl)))),
///         inject(|foo: Arc<FooImpl>| Ok(Bar(foo))),
///     ],
/// });
/// container.bind_with::<dyn Foo, FooImpl>(|foo| foo).unwrap();
///
/// let bar = container.resolve::<Bar>().unwrap();
/// assert!(Arc::ptr_eq(&bar.0, &container.resolve::<FooImpl>().unwrap()));
/// ```
#[macro_export]
macro_rules! registry {
    (
        $(
            $kind:ident ( $($decl:tt)+ ) $( [ $($constructors:tt)* ] )?
        ),* $(,)?
    ) => {{
        let registry = $crate::Registry::new();
        $(
            let registry = registry.add(
                $crate::registry_internal! { @descriptor $kind ( $($decl)+ ) [ $($($constructors)*)? ] }
            );
        )*
        registry
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! registry_internal {
    // === Descriptors ===
    // Example: registry_internal! { @descriptor interface (dyn Foo) [] }
    (@descriptor interface ( $ty:ty ) [ ]) => {
        $crate::TypeDescriptor::interface::<$ty>()
    };
    // Example: registry_internal! { @descriptor object (Settings = Settings::default()) [] }
    (@descriptor object ( $ty:ty = $value:expr ) [ ]) => {
        $crate::TypeDescriptor::object::<$ty>($value)
    };
    // Example: registry_internal! { @descriptor concrete (FooImpl) [ public(|| Ok(FooImpl)) ] }
    (@descriptor concrete ( $ty:ty ) [ $($constructors:tt)* ]) => {
        $crate::registry_internal! { @constructors $crate::TypeDescriptor::concrete::<$ty>(), [ $($constructors)* ] }
    };
    (@descriptor singleton ( $ty:ty ) [ $($constructors:tt)* ]) => {
        $crate::registry_internal! { @constructors $crate::TypeDescriptor::concrete::<$ty>().singleton(), [ $($constructors)* ] }
    };
    (@descriptor abstract_type ( $ty:ty ) [ $($constructors:tt)* ]) => {
        $crate::registry_internal! {
            @constructors $crate::TypeDescriptor::new::<$ty>($crate::TypeKind::Abstract), [ $($constructors)* ]
        }
    };

    // === Constructors ===
    (@constructors $descriptor:expr, [ ]) => {
        $descriptor
    };
    (@constructors $descriptor:expr, [ $visibility:ident ( $inst:expr ) $(, $($rest:tt)*)? ]) => {
        $crate::registry_internal! {
            @constructors $descriptor.constructor($crate::registry_internal! { @constructor $visibility, $inst }),
            [ $($($rest)*)? ]
        }
    };

    (@constructor public, $inst:expr) => {
        $crate::Constructor::new($inst)
    };
    (@constructor inject, $inst:expr) => {
        $crate::Constructor::new($inst).inject()
    };
    (@constructor internal, $inst:expr) => {
        $crate::Constructor::new($inst).with_visibility($crate::Visibility::Internal)
    };
    (@constructor protected, $inst:expr) => {
        $crate::Constructor::new($inst).with_visibility($crate::Visibility::Protected)
    };
    (@constructor private, $inst:expr) => {
        $crate::Constructor::new($inst).with_visibility($crate::Visibility::Private)
    };
}

#[cfg(test)]
mod tests {
    use crate::{any::TypeInfo, descriptor::Visibility, TypeKind};

    use alloc::sync::Arc;

    trait Foo: Send + Sync {}

    struct FooImpl;

    impl Foo for FooImpl {}

    struct Bar(#[allow(dead_code)] Arc<FooImpl>);

    #[derive(Debug, PartialEq)]
    struct Settings {
        port: u16,
    }

    struct Base;

    #[test]
    fn test_registry_macro() {
        let registry = crate::registry! {
            interface(dyn Foo),
            singleton(FooImpl) [ public(|| Ok(FooImpl)) ],
            concrete(Bar) [
                private(|| Ok(Bar(Arc::new(FooImpl)))),
                internal(|foo: Arc<FooImpl>| Ok(Bar(foo))),
                protected(|foo: Arc<FooImpl>, _: Arc<Settings>| Ok(Bar(foo))),
                inject(|foo: Arc<FooImpl>| Ok(Bar(foo))),
            ],
            abstract_type(Base) [ public(|| Ok(Base)) ],
            object(Settings = Settings { port: 8080 }),
        };

        assert_eq!(registry.len(), 5);
        assert!(registry.get(&TypeInfo::of::<dyn Foo>()).unwrap().is_interface());
        assert!(registry.get(&TypeInfo::of::<FooImpl>()).unwrap().config().singleton);
        assert_eq!(registry.get(&TypeInfo::of::<Base>()).unwrap().kind(), TypeKind::Abstract);

        let bar = registry.get(&TypeInfo::of::<Bar>()).unwrap();
        let visibilities: alloc::vec::Vec<_> = bar.constructors().iter().map(|constructor| constructor.visibility()).collect();
        assert_eq!(
            visibilities,
            [Visibility::Private, Visibility::Internal, Visibility::Protected, Visibility::Public],
        );
        assert!(bar.constructors()[3].is_inject());
        assert!(!bar.config().singleton);

        let settings = registry.get(&TypeInfo::of::<Settings>()).unwrap().object_instance().unwrap();
        assert_eq!(*settings.downcast::<Settings>().unwrap(), Settings { port: 8080 });
    }

    #[test]
    fn test_registry_macro_empty() {
        let registry = crate::registry! {};

        assert!(registry.is_empty());
    }
}
