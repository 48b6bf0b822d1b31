use alloc::boxed::Box;
use core::fmt::{self, Display, Formatter};

use super::{instantiate::InstantiateErrorKind, select::SelectErrorKind};
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("No binding found for interface: {name}")]
    UnresolvableInterface { name: &'static str },
    #[error(transparent)]
    CircularDependency(CircularDependency),
    #[error("Type descriptor not found: {name}")]
    NoDescriptor { name: &'static str },
    #[error("Incorrect instance type. Actual: {actual}, expected: {expected}")]
    IncorrectType { expected: &'static str, actual: &'static str },
    #[error("Constructor of {name} expects {expected} arguments, got {actual}")]
    ArgumentsMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error(transparent)]
    Select(#[from] SelectErrorKind),
    #[error(transparent)]
    Instantiate(InstantiateErrorKind),
}

/// Resolution chain that revisited a type still under construction.
///
/// `requested` is the type of the outermost resolution call,
/// `chain` lists the types under construction in the order they were entered, ending with the revisited one.
#[derive(thiserror::Error, Debug)]
pub struct CircularDependency {
    pub requested: TypeInfo,
    pub chain: Box<[TypeInfo]>,
}

impl Display for CircularDependency {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Circular dependency detected while resolving {}: ", self.requested)?;
        for (index, type_info) in self.chain.iter().enumerate() {
            if index > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", type_info.short_name())?;
        }
        Ok(())
    }
}
