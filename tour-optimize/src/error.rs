use thiserror::Error as ThisError;

/// Failures reported by the route optimizer. No partial results are returned alongside them.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// The input cannot describe a tour: no points, an unknown start, a bad coordinate.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// The distance matrix holds an unusable weight (NaN, infinite) on the selected path.
    #[error("infeasible: {0}")]
    Infeasible(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn infeasible(message: impl Into<String>) -> Self {
        Self::Infeasible(message.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, Error::Infeasible(_))
    }
}
