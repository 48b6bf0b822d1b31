use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::mem;
use parking_lot::{Mutex, RwLock};
use tracing::{debug, error, info_span};

use super::cache::Cache;
use crate::{
    any::TypeInfo,
    binding::{Binding, Bindings},
    dependency_resolver::DependencyResolver as _,
    descriptor::{Injectable, TypeDescriptor},
    errors::{BindingErrorKind, CircularDependency, InstantiatorErrorKind, ResolveErrorKind},
    instance::Instance,
    registry::Registry,
    selector::{ConstructorSelector, DefaultConstructorSelector},
};

/// Resolution container.
///
/// Owns the bindings and the singleton cache, resolves a requested type to a fully constructed instance
/// by recursively resolving the parameters of the selected constructor.
///
/// # Concurrency
/// Bindings and descriptors are guarded by read-write locks, the singleton cache by a mutex.
/// No lock is held while a constructor runs, so concurrent first resolutions of a singleton
/// may construct it more than once. Only the first instance written to the cache is kept,
/// and every caller, including the ones whose instance was discarded, gets the cached one.
#[derive(Clone)]
pub struct Container {
    pub(crate) inner: Arc<ContainerInner>,
}

impl Container {
    /// Creates container with [`DefaultConstructorSelector`]
    #[inline]
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self::new_with_selector(registry, DefaultConstructorSelector)
    }

    /// Creates container with a substitute constructor selector
    #[inline]
    #[must_use]
    pub fn new_with_selector(registry: Registry, selector: impl ConstructorSelector + 'static) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                registry: RwLock::new(registry),
                bindings: RwLock::new(Bindings::new()),
                cache: Mutex::new(Cache::new()),
                selector: Box::new(selector),
            }),
        }
    }

    /// Adds a descriptor to the descriptor table, replacing the previous one of the same type
    pub fn describe(&self, descriptor: TypeDescriptor) {
        let type_info = descriptor.type_info();
        if self.inner.registry.write().add_descriptor(descriptor).is_some() {
            debug!(dependency = type_info.name, "Descriptor replaced");
        }
    }

    #[inline]
    pub fn describe_injectable<T: Injectable>(&self) {
        self.describe(T::descriptor());
    }

    /// Registers a binding of `source` to `target`, `None` means the source type resolves to itself.
    ///
    /// # Errors
    /// Returns [`BindingErrorKind::AlreadyExists`] if the source type already has a binding
    #[inline]
    pub fn register_binding(&self, source: TypeInfo, target: Option<TypeInfo>) -> Result<(), BindingErrorKind> {
        self.add_binding(Binding::new(source, target))
    }

    /// # Errors
    /// Returns [`BindingErrorKind::AlreadyExists`] if the source type already has a binding
    pub fn add_binding(&self, binding: Binding) -> Result<(), BindingErrorKind> {
        let source = binding.source();
        let target = binding.resolved_target();

        if let Err(err) = self.inner.bindings.write().insert(binding) {
            error!("{}", err);
            return Err(err);
        }

        debug!(source = source.name, target = target.name, "Binding registered");
        Ok(())
    }

    /// # Errors
    /// Returns [`BindingErrorKind::AlreadyExists`] if `Source` already has a binding
    #[inline]
    pub fn bind<Source, Target>(&self) -> Result<(), BindingErrorKind>
    where
        Source: ?Sized + 'static,
        Target: ?Sized + 'static,
    {
        self.register_binding(TypeInfo::of::<Source>(), Some(TypeInfo::of::<Target>()))
    }

    /// # Errors
    /// Returns [`BindingErrorKind::AlreadyExists`] if `T` already has a binding
    #[inline]
    pub fn bind_self<T: ?Sized + 'static>(&self) -> Result<(), BindingErrorKind> {
        self.register_binding(TypeInfo::of::<T>(), None)
    }

    /// Binds `Source` to `Target` and converts every resolved `Target` into `Arc<Source>`,
    /// so the binding can be injected and requested as `Arc<Source>`.
    ///
    /// # Errors
    /// Returns [`BindingErrorKind::AlreadyExists`] if `Source` already has a binding
    #[inline]
    pub fn bind_with<Source, Target>(&self, upcast: fn(Arc<Target>) -> Arc<Source>) -> Result<(), BindingErrorKind>
    where
        Source: ?Sized + Send + Sync + 'static,
        Target: Send + Sync + 'static,
    {
        self.add_binding(Binding::with_upcast(upcast))
    }

    #[inline]
    #[must_use]
    pub fn is_bound(&self, source: &TypeInfo) -> bool {
        self.inner.bindings.read().contains(source)
    }

    #[inline]
    #[must_use]
    pub fn bindings_len(&self) -> usize {
        self.inner.bindings.read().len()
    }

    #[inline]
    #[must_use]
    pub fn is_cached(&self, target: &TypeInfo) -> bool {
        self.inner.cache.lock().get(target).is_some()
    }

    /// Resolves an instance of the requested type.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::UnresolvableInterface`] if the resolved target is an interface
    /// - Returns [`ResolveErrorKind::CircularDependency`] if the type transitively requires itself
    /// - Returns [`ResolveErrorKind::NoDescriptor`] if the target isn't in the descriptor table
    /// - Returns [`ResolveErrorKind::Select`] if the selector can't choose a constructor
    /// - Returns [`ResolveErrorKind::Instantiate`] with the error of a failed user constructor
    pub fn resolve_binding(&self, source: &TypeInfo) -> Result<Instance, ResolveErrorKind> {
        let mut chain = Vec::new();
        self.resolve_in_chain(*source, *source, &mut chain)
    }

    /// Typed form of [`Self::resolve_binding`]
    ///
    /// # Errors
    /// Same as [`Self::resolve_binding`], plus [`ResolveErrorKind::IncorrectType`]
    /// if the instance can't be represented as `Arc<T>`
    #[inline]
    pub fn resolve<T>(&self) -> Result<Arc<T>, ResolveErrorKind>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.resolve_binding(&TypeInfo::of::<T>()).and_then(Arc::<T>::resolve)
    }

    /// Resolves every registered binding and discards the results, failing on the first unresolvable one.
    ///
    /// # Warning
    /// This method materializes the whole graph, singletons included.
    /// Use it at startup or in debug builds, not on a hot path.
    ///
    /// # Errors
    /// Returns the error of the first binding that can't be resolved
    pub fn verify_bindings(&self) -> Result<(), ResolveErrorKind> {
        let sources: Vec<TypeInfo> = self.inner.bindings.read().sources().collect();
        for source in sources {
            self.resolve_binding(&source)?;
        }

        debug!("Bindings verified");
        Ok(())
    }
}

impl Container {
    fn resolve_in_chain(&self, source: TypeInfo, requested: TypeInfo, chain: &mut Vec<TypeInfo>) -> Result<Instance, ResolveErrorKind> {
        let span = info_span!("resolve", dependency = source.name, depth = chain.len());
        let _guard = span.enter();

        let binding = self.inner.bindings.read().get(&source).cloned();
        let target = binding.as_ref().map_or(source, Binding::resolved_target);

        let (descriptor, source_object) = {
            let registry = self.inner.registry.read();
            let Some(descriptor) = registry.get(&target).cloned() else {
                let err = ResolveErrorKind::NoDescriptor { name: target.name };
                error!("{}", err);
                return Err(err);
            };
            let source_object = registry
                .get(&source)
                .and_then(TypeDescriptor::object_instance)
                .cloned();
            (descriptor, source_object)
        };

        if descriptor.is_interface() {
            let err = ResolveErrorKind::UnresolvableInterface { name: target.name };
            error!("{}", err);
            return Err(err);
        }

        if let Some(object) = source_object {
            debug!("Object instance returned");
            return Ok(object);
        }

        let cached = self.inner.cache.lock().get(&target);
        if let Some(instance) = cached {
            debug!("Found in cache");
            return Self::upcast(binding.as_ref(), instance);
        }
        debug!("Not found in cache");

        if chain.contains(&target) {
            chain.push(target);
            let err = ResolveErrorKind::CircularDependency(CircularDependency {
                requested,
                chain: mem::take(chain).into_boxed_slice(),
            });
            error!("{}", err);
            return Err(err);
        }

        let constructor = match self.inner.selector.select(&descriptor) {
            Ok(constructor) => constructor,
            Err(err) => {
                error!("{}", err);
                return Err(err.into());
            }
        };

        chain.push(target);
        let mut arguments = Vec::with_capacity(constructor.parameters().len());
        for parameter in constructor.parameters() {
            arguments.push(self.resolve_in_chain(*parameter, requested, chain)?);
        }
        chain.pop();

        let instance = match (constructor.instantiator)(arguments) {
            Ok(instance) => instance,
            Err(InstantiatorErrorKind::Deps(err)) => {
                error!("{}", err);
                return Err(err);
            }
            Err(InstantiatorErrorKind::Factory(err)) => {
                error!("{}", err);
                return Err(ResolveErrorKind::Instantiate(err));
            }
        };

        let instance = if descriptor.config().singleton {
            debug!("Cached");
            self.inner.cache.lock().get_or_insert(target, instance)
        } else {
            instance
        };

        Self::upcast(binding.as_ref(), instance)
    }

    fn upcast(binding: Option<&Binding>, instance: Instance) -> Result<Instance, ResolveErrorKind> {
        match binding {
            Some(binding) => binding.upcast(instance).map_err(|err| {
                error!("{}", err);
                err
            }),
            None => Ok(instance),
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new(Registry::new())
    }
}

#[cfg(feature = "std")]
impl Container {
    /// Process-wide container, created on first access with an empty descriptor table and [`DefaultConstructorSelector`].
    ///
    /// Prefer an explicitly owned container created with [`Container::new`], whose lifetime is managed by the application.
    #[must_use]
    pub fn default_instance() -> &'static Container {
        static DEFAULT: once_cell::sync::Lazy<Container> = once_cell::sync::Lazy::new(Container::default);

        &DEFAULT
    }
}

pub(crate) struct ContainerInner {
    pub(crate) registry: RwLock<Registry>,
    pub(crate) bindings: RwLock<Bindings>,
    pub(crate) cache: Mutex<Cache>,
    pub(crate) selector: Box<dyn ConstructorSelector>,
}
