#[derive(thiserror::Error, Debug)]
pub enum BindingErrorKind {
    #[error("Binding already exists: {name}")]
    AlreadyExists { name: &'static str },
}
