//! # Persistence Errors
//!
//! This module defines the [`PersistenceError`] enum and the
//! [`PersistenceErrorExt`] context helper used throughout the crate. Each
//! variant marks one failure boundary — filesystem, document shape, domain
//! validation, or caller contract — and wraps the underlying cause so that
//! callers can log full diagnostics.

use std::borrow::Cow;
use thub_domain::DomainError;

/// A specialized [`PersistenceError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// The underlying filesystem operation failed (permissions, missing
    /// device, disk full, invalid path). Never retried internally.
    #[error("Storage unavailable{}: {source}", format_context(.context))]
    StorageUnavailable { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// The bytes on disk are not well-formed JSON or do not match the
    /// expected roster document shape.
    #[error("Malformed roster document{}: {source}", format_context(.context))]
    MalformedDocument { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// The document parsed structurally but its entries failed domain
    /// validation. Carries the original validation failure.
    #[error("Roster conversion failed{}: {source}", format_context(.context))]
    DataConversion { source: DomainError, context: Option<Cow<'static, str>> },

    /// A storage location that violates the gateway contract (e.g. empty).
    #[error("Invalid storage location{}: {message}", format_context(.context))]
    InvalidLocation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal persistence error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PersistenceError {
    /// Returns `true` for failures caused by the persisted data itself
    /// (shape or content), as opposed to the storage medium or the caller.
    #[must_use]
    pub const fn is_data_conversion(&self) -> bool {
        matches!(self, Self::MalformedDocument { .. } | Self::DataConversion { .. })
    }
}

/// Adds `.context(..)` to `Result`s carrying a [`PersistenceError`] or one
/// of its wrapped source types.
pub trait PersistenceErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PersistenceError>;
}

impl<T> PersistenceErrorExt<T> for Result<T, PersistenceError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PersistenceError::StorageUnavailable { context: c, .. }
                | PersistenceError::MalformedDocument { context: c, .. }
                | PersistenceError::DataConversion { context: c, .. }
                | PersistenceError::InvalidLocation { context: c, .. }
                | PersistenceError::Internal { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<std::io::Error> for PersistenceError {
    #[inline]
    fn from(source: std::io::Error) -> Self {
        Self::StorageUnavailable { source, context: None }
    }
}

impl<T> PersistenceErrorExt<T> for Result<T, std::io::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PersistenceError> {
        self.map_err(|source| PersistenceError::StorageUnavailable {
            source,
            context: Some(context.into()),
        })
    }
}

impl From<serde_json::Error> for PersistenceError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedDocument { source, context: None }
    }
}

impl<T> PersistenceErrorExt<T> for Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PersistenceError> {
        self.map_err(|source| PersistenceError::MalformedDocument {
            source,
            context: Some(context.into()),
        })
    }
}

impl From<DomainError> for PersistenceError {
    #[inline]
    fn from(source: DomainError) -> Self {
        Self::DataConversion { source, context: None }
    }
}

impl<T> PersistenceErrorExt<T> for Result<T, DomainError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PersistenceError> {
        self.map_err(|source| PersistenceError::DataConversion {
            source,
            context: Some(context.into()),
        })
    }
}

impl From<&'static str> for PersistenceError {
    #[inline]
    fn from(s: &'static str) -> Self {
        Self::Internal { message: Cow::Borrowed(s), context: None }
    }
}

impl From<String> for PersistenceError {
    #[inline]
    fn from(s: String) -> Self {
        Self::Internal { message: Cow::Owned(s), context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_errors_convert_with_context() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        let err = result.context("Writing roster.json").unwrap_err();

        let rendered = format!("{err}");
        assert!(rendered.starts_with("Storage unavailable (Writing roster.json):"));
        assert!(err.source().is_some());
    }

    #[test]
    fn data_conversion_preserves_the_domain_cause() {
        let cause = DomainError::Validation { message: "bad field".into(), context: None };
        let err = PersistenceError::from(cause);

        assert!(err.is_data_conversion());
        assert!(format!("{err}").contains("bad field"));
    }

    #[test]
    fn storage_failures_are_not_data_conversion() {
        let err = PersistenceError::from(std::io::Error::other("disk on fire"));
        assert!(!err.is_data_conversion());
    }
}
