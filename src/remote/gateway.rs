//! The HTTP gateway actor.
//!
//! Owns the [`reqwest::Client`] and the service base URL; serves one
//! [`RemoteRequest`] at a time, so responses only ever land on the slot
//! they were requested for.

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use super::wire::{LoginRequest, LoginResponse, UserPage, UserRecord};
use super::{RemoteClient, RemoteRequest};
use crate::error::RemoteError;

pub struct HttpGateway {
    receiver: mpsc::Receiver<RemoteRequest>,
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(buffer_size: usize, base_url: impl Into<String>) -> (Self, RemoteClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let gateway = Self {
            receiver,
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        };
        (gateway, RemoteClient::new(sender))
    }

    #[instrument(name = "http_gateway", skip(self))]
    pub async fn run(mut self) {
        info!("HttpGateway starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RemoteRequest::FetchPage { page, respond_to } => {
                    let _ = respond_to.send(self.fetch_page(page).await);
                }
                RemoteRequest::UpdateUser { id, record, respond_to } => {
                    let _ = respond_to.send(self.update_user(id, record).await);
                }
                RemoteRequest::DeleteUser { id, respond_to } => {
                    let _ = respond_to.send(self.delete_user(id).await);
                }
                RemoteRequest::Login { email, password, respond_to } => {
                    let _ = respond_to.send(self.login(email, password).await);
                }
            }
        }
        info!("HttpGateway stopped");
    }

    async fn fetch_page(&self, page: u32) -> Result<UserPage, RemoteError> {
        let url = format!("{}/api/users?page={}", self.base_url, page);
        debug!(%url, "Fetching users page");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            error!(%status, page, "Page fetch rejected");
            return Err(RemoteError::Status(status.as_u16()));
        }
        response
            .json::<UserPage>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn update_user(&self, id: u64, record: UserRecord) -> Result<UserRecord, RemoteError> {
        let url = format!("{}/api/users/{}", self.base_url, id);
        debug!(%url, "Updating user");
        let response = self
            .http
            .put(&url)
            .json(&record)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            error!(%status, id, "Update rejected");
            return Err(RemoteError::Status(status.as_u16()));
        }
        response
            .json::<UserRecord>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }

    async fn delete_user(&self, id: u64) -> Result<(), RemoteError> {
        let url = format!("{}/api/users/{}", self.base_url, id);
        debug!(%url, "Deleting user");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            error!(%status, id, "Delete rejected");
            return Err(RemoteError::Status(status.as_u16()));
        }
        Ok(())
    }

    async fn login(&self, email: String, password: String) -> Result<String, RemoteError> {
        let url = format!("{}/api/login", self.base_url);
        debug!(%url, "Logging in");
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            error!(%status, "Login rejected");
            return Err(RemoteError::Status(status.as_u16()));
        }
        let body = response
            .json::<LoginResponse>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(body.token)
    }
}
