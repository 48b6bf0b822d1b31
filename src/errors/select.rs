use core::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotInstantiableReason {
    Interface,
    Abstract,
    NoAccessibleConstructor,
}

impl Display for NotInstantiableReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotInstantiableReason::Interface => "Type is an interface",
            NotInstantiableReason::Abstract => "Type is abstract",
            NotInstantiableReason::NoAccessibleConstructor => "Type has only private or protected constructors",
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectErrorKind {
    #[error("{reason}: {name}")]
    NotInstantiable {
        name: &'static str,
        reason: NotInstantiableReason,
    },
    #[error("Type has multiple constructors marked for injection: {name}")]
    AmbiguousInjection { name: &'static str },
    #[error("Unable to select constructor: {name}")]
    NotSelectable { name: &'static str },
}
