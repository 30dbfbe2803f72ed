//! Error types for the spatializer plugin
//!
//! None of these cross the plugin boundary: callbacks log them and still report
//! success to the host.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpatializerError {
    #[error("Host passed a null effect state")]
    NullState,

    #[error(
        "Incompatible host: structsize {structsize}, host API version {hostapiversion:#08x}"
    )]
    IncompatibleHost { structsize: u32, hostapiversion: u32 },

    #[error("Host did not provide spatializer data")]
    MissingSpatializerData,

    #[error("Invalid effect name: {0:?}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, SpatializerError>;
