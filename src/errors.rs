mod binding;
mod instantiate;
mod resolve;
mod select;

pub use binding::BindingErrorKind;
pub use instantiate::{InstantiateErrorKind, InstantiatorErrorKind};
pub use resolve::{CircularDependency, ResolveErrorKind};
pub use select::{NotInstantiableReason, SelectErrorKind};
