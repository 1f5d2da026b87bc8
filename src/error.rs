use thiserror::Error;

/// Errors surfaced by the HTTP gateway.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("gateway communication error: {0}")]
    GatewayClosed(String),
}

/// Errors that can occur during login.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("no token returned by the server")]
    MissingToken,
}

/// Errors that can occur during user-list operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ListError {
    #[error("failed to fetch users: {0}")]
    Fetch(RemoteError),
    #[error("failed to update the user: {0}")]
    Update(RemoteError),
    #[error("failed to delete the user: {0}")]
    Delete(RemoteError),
}
