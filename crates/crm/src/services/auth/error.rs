//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during sign-in.
///
/// There is exactly one user-facing kind. Whether the email was malformed,
/// unknown with a wrong password, or known with a wrong password, the UI
/// shows the same message and the caller is expected to let the user
/// correct the form and retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The email/password pair was not accepted.
    #[error("invalid email or password")]
    InvalidCredentials,
}
