use snafu::Snafu;

pub use crate::errors::Error::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Runtime error: Are you sure your code runs inside #[scurry::runtime]?
    RuntimeError,
    /// Stage error: {source}.
    StageError { source: StageError },
    /// Asset error: {source}.
    AssetError { source: AssetError },
    /// Unknown error: {info}.
    Unknown { info: String },
}

impl From<StageError> for Error {
    fn from(value: StageError) -> Self {
        Self::StageError { source: value }
    }
}

impl From<AssetError> for Error {
    fn from(value: AssetError) -> Self {
        Self::AssetError { source: value }
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StageError {
    /// No element matches selector '{selector}'
    AnchorNotFound { selector: String },
    /// Sprite #{id} is not attached to the stage
    NotAttached { id: usize },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum AssetError {
    /// Image '{src}' could not be loaded - {info}
    LoadFailed { src: String, info: String },
}
