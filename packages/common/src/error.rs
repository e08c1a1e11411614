use crate::validator::Dimension;
use thiserror::Error;

/// Rejection reasons for a raw dialog value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} value required")]
    Required(Dimension),

    #[error("{0} is not a valid number")]
    NotANumber(Dimension),

    #[error("{0} must be greater than 0")]
    NotPositive(Dimension),

    #[error("{0} is smaller than one pixel")]
    BelowOnePixel(Dimension),
}

impl ValidationError {
    pub fn dimension(&self) -> Dimension {
        match self {
            ValidationError::Required(d)
            | ValidationError::NotANumber(d)
            | ValidationError::NotPositive(d)
            | ValidationError::BelowOnePixel(d) => *d,
        }
    }
}
