/// Config for a type descriptor
/// ## Fields
/// - `singleton`:
///   If `true`, the first successfully constructed instance of the type will be cached and reused
///   for the lifetime of the container.
///
///   This does **not** affect the dependencies of the instance.
///   Only the final result is cached, the dependencies follow their own config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub singleton: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub const fn singleton() -> Self {
        Self { singleton: true }
    }

    #[inline]
    #[must_use]
    pub const fn transient() -> Self {
        Self { singleton: false }
    }
}
