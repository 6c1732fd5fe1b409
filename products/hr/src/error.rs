use thiserror::Error;

/// Shared result type for HR record mutations.
pub type HrResult<T> = Result<T, ValidationError>;

/// Rejected field assignment on an [`Employee`](crate::Employee).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("first name is mandatory")]
    FirstName,
    #[error("last name is mandatory")]
    LastName,
    #[error(
        "ssn is mandatory and must be between 9 and 11 characters (if hyphens are used), got {len}"
    )]
    Ssn { len: usize },
    #[error("cube id is mandatory")]
    CubeId,
    #[error("orientation date is mandatory")]
    OrientationDate,
}

impl ValidationError {
    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::FirstName => "first_name",
            ValidationError::LastName => "last_name",
            ValidationError::Ssn { .. } => "ssn",
            ValidationError::CubeId => "cube_id",
            ValidationError::OrientationDate => "orientation_date",
        }
    }
}
