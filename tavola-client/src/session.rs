//! Shared client handle
//!
//! One [`SharedClient`] is created at startup and handed to every service.
//! It owns the token store and the current [`HttpClient`]; `rebuild()` swaps
//! in a new client after the stored token changes.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::HttpClient;
use crate::storage::{FileTokenStore, TokenStore};

#[derive(Debug)]
struct Inner {
    config: ClientConfig,
    store: Arc<dyn TokenStore>,
    current: RwLock<Arc<HttpClient>>,
}

/// Cloneable handle to the process-wide HTTP client.
///
/// Each request takes a snapshot of the current client. Requests already in
/// flight when `rebuild()` runs finish on the client they started with.
#[derive(Debug, Clone)]
pub struct SharedClient {
    inner: Arc<Inner>,
}

impl SharedClient {
    /// Build the initial client from the stored token.
    pub fn new(config: ClientConfig, store: Arc<dyn TokenStore>) -> ClientResult<Self> {
        let client = HttpClient::build(&config, store.as_ref())?;
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                store,
                current: RwLock::new(Arc::new(client)),
            }),
        })
    }

    /// Build from environment configuration with the token kept on disk.
    pub fn from_env() -> ClientResult<Self> {
        let config = ClientConfig::from_env();
        let store = Arc::new(FileTokenStore::new(&config.token_dir));
        Self::new(config, store)
    }

    /// Snapshot of the current client.
    pub async fn current(&self) -> Arc<HttpClient> {
        self.inner.current.read().await.clone()
    }

    /// Replace the current client with one built from the token as stored now.
    pub async fn rebuild(&self) -> ClientResult<Arc<HttpClient>> {
        let client = Arc::new(HttpClient::build(
            &self.inner.config,
            self.inner.store.as_ref(),
        )?);
        *self.inner.current.write().await = client.clone();
        tracing::info!(authorized = client.is_authorized(), "HTTP client rebuilt");
        Ok(client)
    }

    /// Store a freshly issued token and rebuild.
    pub async fn login_with_token(&self, token: &str) -> ClientResult<Arc<HttpClient>> {
        self.inner.store.save(token)?;
        self.rebuild().await
    }

    /// Forget the stored token and rebuild.
    pub async fn logout(&self) -> ClientResult<Arc<HttpClient>> {
        self.inner.store.clear()?;
        self.rebuild().await
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.inner.store
    }

    /// Base URL of backend images.
    pub async fn image_path(&self) -> String {
        self.current().await.image_path()
    }
}
