//! Error types for plate figure operations.
//!
//! This module provides the main error type [`PlateError`] which wraps the
//! error conditions that can occur while normalizing well data, building a
//! scene or exporting it.

use thiserror::Error;

use platemap_core::well::WellError;

/// The main error type for platemap operations.
#[derive(Debug, Error)]
pub enum PlateError {
    /// A per-well data sequence is longer than the plate has wells.
    #[error("{field} length ({len}) exceeds total wells ({n_wells})")]
    Input {
        field: &'static str,
        len: usize,
        n_wells: usize,
    },

    /// A well name could not be parsed, or the plate shape is empty.
    #[error(transparent)]
    Well(#[from] WellError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl PlateError {
    /// Create a new `Input` error for a sequence that exceeds the well count.
    pub fn new_input_error(field: &'static str, len: usize, n_wells: usize) -> Self {
        Self::Input {
            field,
            len,
            n_wells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_message() {
        let err = PlateError::new_input_error("values", 97, 96);
        assert_eq!(err.to_string(), "values length (97) exceeds total wells (96)");
    }

    #[test]
    fn test_well_error_is_transparent() {
        let err: PlateError = WellError::InvalidName("Z".to_string()).into();
        assert!(err.to_string().starts_with("invalid well name `Z`"));
    }
}
