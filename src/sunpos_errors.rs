use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SunPosError {
    #[error("Invalid date string: {0}")]
    InvalidDate(String),
}

impl From<hifitime::HifitimeError> for SunPosError {
    fn from(err: hifitime::HifitimeError) -> Self {
        SunPosError::InvalidDate(err.to_string())
    }
}
