//! Common error infrastructure for spell-core.
//!
//! Domain-specific errors (e.g., `CastError`, `EnchantmentError`) live next to
//! the component that produces them. All of them implement [`GameError`] so
//! callers can classify failures uniformly.
//!
//! Nothing in this crate panics on bad input: invalid indices, misconfigured
//! ranges and failing collaborators surface as `Result`/`Option`/`bool`.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Temporary condition; the same request may succeed later.
    ///
    /// Examples: quad occupied, unit provider busy
    Recoverable,

    /// Invalid input that should not be retried unchanged.
    ///
    /// Examples: quad index out of range, non-enchantment spell on a quad
    Validation,

    /// Unexpected failure of a collaborator or plugin.
    ///
    /// Examples: modifier provider failed, presentation spawn failed
    Internal,

    /// Required collaborator missing; the component cannot work at all.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug or broken collaborator.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all spell-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable SCREAMING_SNAKE identifiers
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
