//! System wiring, startup, and shutdown.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::auth::LoginController;
use crate::list::UserListController;
use crate::remote::gateway::HttpGateway;
use crate::remote::RemoteClient;
use crate::session::{FileTokenStore, SessionStore, TokenStore};

/// Installs the global tracing subscriber. Call once at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Wires the gateway actor to the session and controllers.
pub struct AppSystem {
    pub remote: RemoteClient,
    pub session: SessionStore,
    pub login: LoginController,
    pub user_list: UserListController,
    gateway_handle: tokio::task::JoinHandle<()>,
}

impl AppSystem {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_token_store(base_url, FileTokenStore::new())
    }

    pub fn with_token_store(base_url: impl Into<String>, store: impl TokenStore + 'static) -> Self {
        let (gateway, remote) = HttpGateway::new(32, base_url);
        let gateway_handle = tokio::spawn(gateway.run());

        let session = SessionStore::init(store);
        let login = LoginController::new(remote.clone());
        let user_list = UserListController::new(remote.clone());

        Self {
            remote,
            session,
            login,
            user_list,
            gateway_handle,
        }
    }

    /// Drops every client handle, which closes the gateway's channel, then
    /// waits for the actor task to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.remote);
        drop(self.login);
        drop(self.user_list);

        if let Err(e) = self.gateway_handle.await {
            error!("Gateway task failed: {:?}", e);
            return Err(format!("Gateway task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
