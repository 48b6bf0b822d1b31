use tracing::debug;

use super::errors::{NotInstantiableReason, SelectErrorKind};
use crate::descriptor::{Constructor, TypeDescriptor};

/// Chooses the constructor the container invokes for a type
pub trait ConstructorSelector: Send + Sync {
    /// # Errors
    /// Returns [`SelectErrorKind`] describing why no constructor of the type qualifies
    fn select<'a>(&self, descriptor: &'a TypeDescriptor) -> Result<&'a Constructor, SelectErrorKind>;
}

/// Selection policy:
/// 1. The only accessible (public or internal) constructor, regardless of parameters or injection marker.
/// 2. Otherwise the accessible constructor marked for injection.
/// 3. Otherwise the accessible parameterless constructor.
///
/// Interfaces, abstract types, types without accessible constructors
/// and types with more than one constructor marked for injection are rejected before selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConstructorSelector;

impl ConstructorSelector for DefaultConstructorSelector {
    fn select<'a>(&self, descriptor: &'a TypeDescriptor) -> Result<&'a Constructor, SelectErrorKind> {
        use NotInstantiableReason::{Abstract, Interface, NoAccessibleConstructor};

        let name = descriptor.type_info().name;
        let not_instantiable = |reason| SelectErrorKind::NotInstantiable { name, reason };

        if descriptor.is_interface() {
            return Err(not_instantiable(Interface));
        }
        if descriptor.is_abstract() {
            return Err(not_instantiable(Abstract));
        }

        let constructors = descriptor.constructors();
        let mut accessible = constructors.iter().filter(|constructor| constructor.visibility().is_accessible());

        let Some(first) = accessible.clone().next() else {
            return Err(not_instantiable(NoAccessibleConstructor));
        };
        if constructors.iter().filter(|constructor| constructor.is_inject()).count() > 1 {
            return Err(SelectErrorKind::AmbiguousInjection { name });
        }

        if accessible.clone().nth(1).is_none() {
            debug!("Selected the only accessible constructor");
            return Ok(first);
        }
        if let Some(constructor) = accessible.clone().find(|constructor| constructor.is_inject()) {
            debug!("Selected constructor marked for injection");
            return Ok(constructor);
        }
        if let Some(constructor) = accessible.find(|constructor| constructor.is_parameterless()) {
            debug!("Selected parameterless constructor");
            return Ok(constructor);
        }

        Err(SelectErrorKind::NotSelectable { name })
    }
}
