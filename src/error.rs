//! Error types shared by every container in the crate.
//!
//! Mutating operations that can reject their input return
//! [`ContainerResult`]; read operations never fail and return `Option`
//! instead. Whenever an error is returned the container is unchanged.

/// Error raised by container operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerError {
    /// Index out of bounds
    IndexOutOfBounds {
        /// The invalid index that was accessed
        index: usize,
        /// The actual length of the container
        length: usize,
    },

    /// A key was rejected by the comparator's validity policy
    /// (for example `NaN` under a total float comparator).
    InvalidKey {
        /// Description of what makes the key invalid
        reason: String,
    },

    /// Key not found in associative container
    KeyNotFound {
        /// The key that was not found
        key: String,
    },

    /// Invalid comparator
    InvalidComparator {
        /// Description of what makes the comparator invalid
        message: String,
    },
}

impl std::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerError::IndexOutOfBounds { index, length } => {
                write!(f, "Index {index} out of bounds for container of length {length}")
            }
            ContainerError::InvalidKey { reason } => {
                write!(f, "Invalid key: {reason}")
            }
            ContainerError::KeyNotFound { key } => {
                write!(f, "Key '{key}' not found")
            }
            ContainerError::InvalidComparator { message } => {
                write!(f, "Invalid comparator: {message}")
            }
        }
    }
}

impl std::error::Error for ContainerError {}

/// Result type for container operations
pub type ContainerResult<T> = Result<T, ContainerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ContainerError::IndexOutOfBounds { index: 7, length: 3 };
        assert_eq!(
            err.to_string(),
            "Index 7 out of bounds for container of length 3"
        );

        let err = ContainerError::InvalidKey { reason: "NaN is not totally orderable".into() };
        assert!(err.to_string().contains("NaN"));
    }
}
