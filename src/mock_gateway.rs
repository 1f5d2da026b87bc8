//! # Mock Gateway
//!
//! Utilities for testing controllers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver. The controller
//! under test sends real [`RemoteRequest`]s to the receiver; the test
//! inspects them and answers through the carried responder, simulating the
//! gateway's behavior (success, failure, delays) deterministically without
//! any HTTP.

use std::io;
use std::sync::{Arc, Mutex};

use tokio::sync::{mpsc, oneshot};

use crate::error::RemoteError;
use crate::remote::wire::{UserPage, UserRecord};
use crate::remote::{RemoteClient, RemoteRequest};
use crate::session::TokenStore;

pub fn create_mock_client(buffer_size: usize) -> (RemoteClient, mpsc::Receiver<RemoteRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RemoteClient::new(sender), receiver)
}

/// Helper to verify that the next message is a FetchPage request
pub async fn expect_fetch_page(
    receiver: &mut mpsc::Receiver<RemoteRequest>,
) -> Option<(u32, oneshot::Sender<Result<UserPage, RemoteError>>)> {
    match receiver.recv().await {
        Some(RemoteRequest::FetchPage { page, respond_to }) => Some((page, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateUser request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<RemoteRequest>,
) -> Option<(u64, UserRecord, oneshot::Sender<Result<UserRecord, RemoteError>>)> {
    match receiver.recv().await {
        Some(RemoteRequest::UpdateUser { id, record, respond_to }) => Some((id, record, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteUser request
pub async fn expect_delete(
    receiver: &mut mpsc::Receiver<RemoteRequest>,
) -> Option<(u64, oneshot::Sender<Result<(), RemoteError>>)> {
    match receiver.recv().await {
        Some(RemoteRequest::DeleteUser { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Login request
pub async fn expect_login(
    receiver: &mut mpsc::Receiver<RemoteRequest>,
) -> Option<(String, String, oneshot::Sender<Result<String, RemoteError>>)> {
    match receiver.recv().await {
        Some(RemoteRequest::Login { email, password, respond_to }) => {
            Some((email, password, respond_to))
        }
        _ => None,
    }
}

pub fn sample_user(id: u64) -> UserRecord {
    UserRecord {
        id,
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        email: format!("user{}@reqres.in", id),
        avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
    }
}

pub fn sample_page(ids: &[u64], total_pages: u32) -> UserPage {
    UserPage {
        data: ids.iter().copied().map(sample_user).collect(),
        total_pages,
    }
}

/// In-memory token store. Clones share the backing slot, so a test can keep
/// a handle and observe what the session persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Arc::new(Mutex::new(Some(token.to_string()))),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn write(&mut self, token: &str) -> io::Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let fetch_task = tokio::spawn(async move { client.fetch_page(2).await });

        let (page, responder) = expect_fetch_page(&mut receiver)
            .await
            .expect("Expected FetchPage request");
        assert_eq!(page, 2);
        responder.send(Ok(sample_page(&[7, 8, 9], 4))).unwrap();

        let result = fetch_task.await.unwrap();
        assert_eq!(result, Ok(sample_page(&[7, 8, 9], 4)));
    }
}
