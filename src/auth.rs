//! The login flow.

use tracing::{error, info, instrument};

use crate::error::AuthError;
use crate::guard::Route;
use crate::remote::RemoteClient;
use crate::session::SessionStore;

/// Drives the login view: one credential submission at a time.
pub struct LoginController {
    remote: RemoteClient,
    error: Option<String>,
    loading: bool,
}

impl LoginController {
    pub fn new(remote: RemoteClient) -> Self {
        Self {
            remote,
            error: None,
            loading: false,
        }
    }

    /// Inline error from the last failed attempt, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submits credentials. Only a success response carrying a non-empty
    /// token establishes the session; every other outcome reads as invalid
    /// credentials and writes nothing to durable storage.
    #[instrument(skip(self, session, password))]
    pub async fn login(
        &mut self,
        session: &mut SessionStore,
        email: &str,
        password: &str,
    ) -> Result<Route, AuthError> {
        self.error = None;
        self.loading = true;
        let result = self
            .remote
            .login(email.to_string(), password.to_string())
            .await;
        self.loading = false;

        match result {
            Ok(token) if !token.is_empty() => {
                info!("Login successful");
                session.login(token);
                Ok(Route::Users)
            }
            Ok(_) => {
                error!("Login response carried no token");
                self.error = Some("Invalid credentials. Please try again.".to_string());
                Err(AuthError::MissingToken)
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                self.error = Some("Invalid credentials. Please try again.".to_string());
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
