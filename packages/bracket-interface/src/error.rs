use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InterfaceError {
    #[error("Unknown tournament format: {name}")]
    UnknownFormat { name: String },

    #[error("Invalid bracket segment: {value}")]
    InvalidSegment { value: String },
}
