//! Error types for the legio crate.
//!
//! This module defines the centralized error type [`LegioError`], the lightbox
//! precondition error [`NavigationError`], and a type alias [`Result`] for
//! convenient error handling throughout the crate. All errors are implemented
//! using the `thiserror` crate for automatic `Error` trait implementation.

use crate::domain::item::ItemId;
use thiserror::Error;

/// The main error type for legio operations.
///
/// Consolidates every failure the crate can report, from store I/O to catalog
/// ingestion problems. Navigation precondition violations convert in through
/// `#[from]` so callers holding a [`GalleryState`](crate::gallery::GalleryState)
/// can propagate them with `?`.
///
/// # Examples
///
/// ```
/// use legio::LegioError;
///
/// fn load_catalog() -> Result<(), LegioError> {
///     Err(LegioError::Catalog("unknown category `naval`".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum LegioError {
    /// Store operation failed.
    ///
    /// Occurs when reading from or writing to the admin record store fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Raw catalog data failed validation at the ingestion boundary.
    ///
    /// Unknown categories, unparseable dates and duplicate identifiers all end
    /// up here. The string names the offending record.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// An admin form was rejected before reaching the store.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Form field that failed validation.
        field: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// Lightbox or carousel navigation was asked to do something impossible.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Precondition violations raised by lightbox and carousel navigation.
///
/// These never describe a recoverable runtime condition: they mean the caller
/// asked to step through a sequence it does not hold a valid position in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Navigation was requested over an empty sequence.
    #[error("cannot navigate an empty projection")]
    EmptyProjection,

    /// The focused item is not part of the projection being navigated.
    #[error("item {0} is not in the current projection")]
    FocusNotInProjection(ItemId),

    /// An explicit index was outside the sequence bounds.
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Sequence length.
        len: usize,
    },

    /// A step was requested while nothing is focused.
    #[error("no item is focused")]
    NothingFocused,
}

/// A specialized `Result` type for legio operations.
pub type Result<T> = std::result::Result<T, LegioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_errors_convert_and_keep_message() {
        let err: LegioError = NavigationError::FocusNotInProjection(ItemId(7)).into();
        assert_eq!(err.to_string(), "item 7 is not in the current projection");
    }

    #[test]
    fn validation_error_names_field() {
        let err = LegioError::Validation {
            field: "title",
            message: "must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Validation error: title: must not be empty");
    }
}
