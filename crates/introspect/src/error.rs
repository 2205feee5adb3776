//! Introspection errors

use thiserror::Error;

/// Errors that abort an introspection call.
///
/// The only fatal condition is a malformed name pattern: patterns are
/// compiled eagerly before iteration, and a bad pattern is a caller
/// programming error, not a runtime condition to recover from.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Malformed name pattern
    #[error("invalid name pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Non-fatal failure to read or invoke a single member.
///
/// Scans never propagate these; the offending member is logged at debug
/// level and skipped, and the rest of the scan proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The member is not readable
    #[error("access denied to {member}")]
    Denied {
        /// Qualified member name
        member: String,
    },

    /// The receiver is not an instance of the declaring class
    #[error("receiver is not an instance of {class}")]
    ReceiverMismatch {
        /// Expected declaring class
        class: String,
    },

    /// The member cannot be invoked through a zero-argument accessor
    #[error("{member} takes arguments and cannot be invoked here")]
    NotInvocable {
        /// Qualified member name
        member: String,
    },
}
