//! Error types of *rustinlet*
//!
//! Configuration errors are raised while a boundary condition is read from a
//! dictionary, geometry errors while a patch snapshot is evaluated. Both are
//! fatal for the operation that raised them. A degenerate patch (zero radius)
//! is not an error, it yields a zero field.

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

/// Missing or malformed configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Dictionary file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary text is not well formed
    #[error("syntax error on line {line}: {reason}")]
    Syntax {
        /// Line of the offending token (1-based)
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// Required keyword not found
    #[error("keyword '{0}' is undefined")]
    Missing(String),

    /// Entry exists but cannot be read as the requested type
    #[error("cannot read entry '{key}' as {expected}")]
    Parse {
        /// Keyword of the entry
        key: String,
        /// Expected kind of entry
        expected: &'static str,
    },

    /// Entry was read but its value is not allowed
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue {
        /// Keyword of the entry
        key: String,
        /// Why the value was rejected
        reason: String,
    },

    /// No boundary condition registered under this name
    #[error("unknown patch field type '{name}', valid types are: {known}")]
    UnknownType {
        /// Requested type name
        name: String,
        /// Comma separated list of registered names
        known: String,
    },
}

/// Violated preconditions of a patch snapshot
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Per-face arrays must have three components
    #[error("{name} must have 3 components per face, got {ncols}")]
    NotThreeDimensional {
        /// Name of the array
        name: &'static str,
        /// Number of columns found
        ncols: usize,
    },

    /// Per-face arrays must be index aligned
    #[error("size mismatch: {left} has {nleft} faces, {right} has {nright}")]
    SizeMismatch {
        /// Name of the first array
        left: &'static str,
        /// Length of the first array
        nleft: usize,
        /// Name of the second array
        right: &'static str,
        /// Length of the second array
        nright: usize,
    },

    /// Coordinates, normals or areas must be finite
    #[error("non-finite {name} at face {face}")]
    NonFinite {
        /// Name of the array
        name: &'static str,
        /// Index of the face
        face: usize,
    },
}

/// Errors of *rustinlet*
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Geometry contract error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Output file could not be written
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Simulation time must be finite
    #[error("simulation time is not finite: {0}")]
    NonFiniteTime(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "omega".to_string(),
            reason: "must be finite".to_string(),
        };
        assert!(err.to_string().contains("omega"));
    }

    #[test]
    fn test_error_from_geometry() {
        let err: Error = GeometryError::SizeMismatch {
            left: "radii",
            nleft: 3,
            right: "normals",
            nright: 2,
        }
        .into();
        assert!(matches!(err, Error::Geometry(_)));
        assert_eq!(
            err.to_string(),
            "size mismatch: radii has 3 faces, normals has 2"
        );
    }
}
