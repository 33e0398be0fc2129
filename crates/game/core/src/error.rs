//! Common error infrastructure for game-core.
//!
//! Domain errors (`GridError`, `OccupancyError`, `TurnError`) live next to the
//! code that raises them. This module holds the classification shared by all
//! of them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry or pick another action
/// - **Validation**: invalid input, reject without retry
/// - **Internal**: state inconsistency that indicates a bug
/// - **Fatal**: the game cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: destination blocked.
    Recoverable,

    /// Examples: empty grid, pending tile in a finished map.
    Validation,

    /// Examples: occupancy map desync, missing expected monster.
    Internal,

    /// Examples: player hitpoints reached zero.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// All error enums derive `thiserror::Error` for their `Display` text and
/// implement this trait for classification.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
