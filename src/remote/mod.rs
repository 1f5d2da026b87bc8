//! Message-passing surface of the remote user service.
//!
//! All network traffic goes through one gateway actor; the rest of the
//! application only ever sees [`RemoteClient`].

pub mod gateway;
pub mod wire;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::error::RemoteError;
use wire::{UserPage, UserRecord};

/// Oneshot responder carried by every gateway request.
pub type GatewayResponse<T> = oneshot::Sender<Result<T, RemoteError>>;

/// Typed requests served by the gateway actor. Each variant carries its
/// parameters and a oneshot channel for the response.
#[derive(Debug)]
pub enum RemoteRequest {
    FetchPage {
        page: u32,
        respond_to: GatewayResponse<UserPage>,
    },
    UpdateUser {
        id: u64,
        record: UserRecord,
        respond_to: GatewayResponse<UserRecord>,
    },
    DeleteUser {
        id: u64,
        respond_to: GatewayResponse<()>,
    },
    Login {
        email: String,
        password: String,
        respond_to: GatewayResponse<String>,
    },
}

/// Handle for talking to the gateway actor.
#[derive(Clone)]
pub struct RemoteClient {
    sender: mpsc::Sender<RemoteRequest>,
}

impl RemoteClient {
    pub fn new(sender: mpsc::Sender<RemoteRequest>) -> Self {
        Self { sender }
    }

    #[instrument(skip(self))]
    pub async fn fetch_page(&self, page: u32) -> Result<UserPage, RemoteError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::FetchPage { page, respond_to })
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway closed".to_string()))?;
        response
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway dropped".to_string()))?
    }

    #[instrument(skip(self, record))]
    pub async fn update_user(&self, id: u64, record: UserRecord) -> Result<UserRecord, RemoteError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::UpdateUser { id, record, respond_to })
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway closed".to_string()))?;
        response
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway dropped".to_string()))?
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: u64) -> Result<(), RemoteError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::DeleteUser { id, respond_to })
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway closed".to_string()))?;
        response
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway dropped".to_string()))?
    }

    #[instrument(skip(self, password))]
    pub async fn login(&self, email: String, password: String) -> Result<String, RemoteError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RemoteRequest::Login { email, password, respond_to })
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway closed".to_string()))?;
        response
            .await
            .map_err(|_| RemoteError::GatewayClosed("Gateway dropped".to_string()))?
    }
}
