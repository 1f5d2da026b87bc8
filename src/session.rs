//! Bearer-token session state.
//!
//! The token is opaque: presence means "authenticated" to the route guard,
//! nothing more. No expiry checking, no refresh, no local verification.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{info, warn};

/// Durable storage for the session token. One key, plain string.
pub trait TokenStore: Send {
    fn read(&self) -> Option<String>;
    fn write(&mut self, token: &str) -> io::Result<()>;
    fn clear(&mut self) -> io::Result<()>;
}

/// Token persisted to a single file.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Default token file location, under the user's config directory.
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("user-console").join("token")
        } else {
            PathBuf::from(".user-console").join("token")
        }
    }

    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for FileTokenStore {
    fn read(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn write(&mut self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)
    }

    fn clear(&mut self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Owns the in-memory token. `login` and `logout` are the only mutators;
/// `init` reads durable storage exactly once.
pub struct SessionStore {
    token: String,
    store: Box<dyn TokenStore>,
}

impl SessionStore {
    pub fn init(store: impl TokenStore + 'static) -> Self {
        let token = store.read().unwrap_or_default();
        Self {
            token,
            store: Box::new(store),
        }
    }

    /// Sets the token and persists it, overwriting any previous value.
    pub fn login(&mut self, token: impl Into<String>) {
        self.token = token.into();
        info!("Session established");
        if let Err(e) = self.store.write(&self.token) {
            warn!(error = %e, "Failed to persist session token");
        }
    }

    /// Clears both the in-memory and the persisted token.
    pub fn logout(&mut self) {
        self.token.clear();
        info!("Session cleared");
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear persisted session token");
        }
    }

    pub fn current_token(&self) -> &str {
        &self.token
    }

    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }
}
