use alloc::{sync::Arc, vec::Vec};
use tracing::debug;

use super::{
    dependency_resolver::{Dependencies, DependencyResolver},
    errors::{InstantiateErrorKind, InstantiatorErrorKind, ResolveErrorKind},
};
use crate::instance::Instance;

/// Constructor body.
///
/// Implemented for closures `FnMut(Arc<A>, Arc<B>, ..) -> Result<T, E>`,
/// the argument types become the constructor parameters.
pub trait Instantiator<Deps>: Clone + Send + Sync + 'static
where
    Deps: Dependencies,
{
    type Provides: Send + Sync + 'static;
    type Error: Into<InstantiateErrorKind>;

    fn instantiate(&mut self, dependencies: Deps) -> Result<Self::Provides, Self::Error>;
}

pub(crate) type BoxedInstantiator =
    Arc<dyn Fn(Vec<Instance>) -> Result<Instance, InstantiatorErrorKind<ResolveErrorKind, InstantiateErrorKind>> + Send + Sync>;

#[must_use]
pub(crate) fn boxed_instantiator<Inst, Deps>(instantiator: Inst) -> BoxedInstantiator
where
    Inst: Instantiator<Deps>,
    Deps: Dependencies + 'static,
{
    Arc::new(move |arguments| {
        let dependencies = match Deps::resolve(arguments) {
            Ok(dependencies) => dependencies,
            Err(err) => return Err(InstantiatorErrorKind::Deps(err)),
        };
        let dependency = match instantiator.clone().instantiate(dependencies) {
            Ok(dependency) => dependency,
            Err(err) => return Err(InstantiatorErrorKind::Factory(err.into())),
        };

        debug!("Instantiated");

        Ok(Instance::from_value(dependency))
    })
}

macro_rules! impl_instantiator {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Instantiator<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + Clone + Send + Sync + 'static,
            Response: Send + Sync + 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: DependencyResolver, )*
        {
            type Provides = Response;
            type Error = Err;

            fn instantiate(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_instantiator);
