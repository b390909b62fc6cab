use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("expected three version components, got {0} in {1:?}")]
    WrongArity(usize, String),

    #[error("invalid version component {0:?}")]
    InvalidComponent(String),
}
