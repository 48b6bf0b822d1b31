/// Error returned by a user constructor.
///
/// The source error is kept as is, both its message and the value behind [`anyhow::Error::downcast_ref`].
#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

/// Failure of a boxed constructor: its arguments couldn't be extracted (`Deps`) or the constructor itself failed (`Factory`)
#[derive(thiserror::Error, Debug)]
pub enum InstantiatorErrorKind<DepsErr, FactoryErr> {
    #[error(transparent)]
    Deps(DepsErr),
    #[error(transparent)]
    Factory(FactoryErr),
}
