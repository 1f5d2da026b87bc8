//! The paginated user-list controller.
//!
//! Mediates between the UI and the remote user service: a page-keyed cache
//! avoids redundant fetches, and the cached state is mutated only when a
//! network operation settles successfully. The cache lives for the
//! controller's lifetime; nothing here is persisted.

use std::collections::HashMap;

use tokio::time::{Duration, Instant};
use tracing::{debug, error, info, instrument};

use crate::error::ListError;
use crate::remote::wire::UserRecord;
use crate::remote::RemoteClient;

/// How long a success notice stays visible unless superseded first.
const SUCCESS_TTL: Duration = Duration::from_secs(3);

/// Transient user-visible status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

#[derive(Debug)]
struct PostedStatus {
    status: Status,
    posted_at: Instant,
}

pub struct UserListController {
    remote: RemoteClient,
    cache: HashMap<u32, Vec<UserRecord>>,
    current_page: u32,
    total_pages: u32,
    status: Option<PostedStatus>,
}

impl UserListController {
    pub fn new(remote: RemoteClient) -> Self {
        Self {
            remote,
            cache: HashMap::new(),
            current_page: 1,
            total_pages: 1,
            status: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Authoritative as of the last successful fetch.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Records cached for `page`, if that page has been fetched.
    pub fn cached_page(&self, page: u32) -> Option<&[UserRecord]> {
        self.cache.get(&page).map(Vec::as_slice)
    }

    /// Records for the page currently displayed. Empty until a fetch lands.
    pub fn current_records(&self) -> &[UserRecord] {
        self.cache
            .get(&self.current_page)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Visible status message. Success notices expire after
    /// [`SUCCESS_TTL`]; errors persist until superseded.
    pub fn status(&self) -> Option<&Status> {
        let posted = self.status.as_ref()?;
        match posted.status {
            Status::Success(_) if posted.posted_at.elapsed() >= SUCCESS_TTL => None,
            _ => Some(&posted.status),
        }
    }

    fn post_status(&mut self, status: Status) {
        self.status = Some(PostedStatus {
            status,
            posted_at: Instant::now(),
        });
    }

    /// Navigation entry point for pagination widgets, which report 0-based
    /// page indices.
    pub async fn select_page(&mut self, index: u32) -> Result<(), ListError> {
        self.load_page(index.saturating_add(1)).await
    }

    /// Makes `page` (1-based) current. A cached page is served without any
    /// network traffic; otherwise exactly one fetch is issued, and a failed
    /// fetch leaves the cache untouched.
    #[instrument(skip(self))]
    pub async fn load_page(&mut self, page: u32) -> Result<(), ListError> {
        self.current_page = page;
        if self.cache.contains_key(&page) {
            debug!(page, "Serving page from cache");
            return Ok(());
        }

        // A fresh fetch supersedes any error from a previous attempt.
        if let Some(posted) = &self.status {
            if matches!(posted.status, Status::Error(_)) {
                self.status = None;
            }
        }

        match self.remote.fetch_page(page).await {
            Ok(fetched) => {
                info!(
                    page,
                    records = fetched.data.len(),
                    total_pages = fetched.total_pages,
                    "Page fetched"
                );
                self.total_pages = fetched.total_pages;
                self.cache.insert(page, fetched.data);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, page, "Page fetch failed");
                self.post_status(Status::Error(
                    "Failed to fetch users. Please try again.".to_string(),
                ));
                Err(ListError::Fetch(e))
            }
        }
    }

    /// Deletes `id` remotely, then removes it from the current page's cached
    /// entry. Other pages are not renumbered or refetched, and `total_pages`
    /// is left as-is; the resulting drift is a known staleness tradeoff.
    #[instrument(skip(self))]
    pub async fn delete_record(&mut self, id: u64) -> Result<(), ListError> {
        match self.remote.delete_user(id).await {
            Ok(()) => {
                if let Some(records) = self.cache.get_mut(&self.current_page) {
                    records.retain(|user| user.id != id);
                }
                info!(id, "User deleted");
                self.post_status(Status::Success("User deleted successfully.".to_string()));
                Ok(())
            }
            Err(e) => {
                error!(error = %e, id, "Delete failed");
                self.post_status(Status::Error(
                    "Failed to delete the user. Please try again.".to_string(),
                ));
                Err(ListError::Delete(e))
            }
        }
    }

    /// Sends the full record to the service; on success the matching record
    /// on the current page is replaced with the server's returned
    /// representation, not the submitted draft.
    #[instrument(skip(self, record), fields(id = record.id))]
    pub async fn update_record(&mut self, record: UserRecord) -> Result<(), ListError> {
        let id = record.id;
        match self.remote.update_user(id, record).await {
            Ok(updated) => {
                if let Some(records) = self.cache.get_mut(&self.current_page) {
                    if let Some(slot) = records.iter_mut().find(|user| user.id == id) {
                        *slot = updated;
                    }
                }
                info!(id, "User updated");
                self.post_status(Status::Success("User updated successfully.".to_string()));
                Ok(())
            }
            Err(e) => {
                error!(error = %e, id, "Update failed");
                self.post_status(Status::Error(
                    "Failed to update the user. Please try again.".to_string(),
                ));
                Err(ListError::Update(e))
            }
        }
    }
}
