//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::mock::{Latency, MockClient};
use crate::preferences::PreferenceStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the mock store client, the preference
/// file and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    client: MockClient,
    preferences: PreferenceStore,
}

impl AppState {
    /// Create application state, loading preferences from the configured path.
    pub async fn new(config: ServerConfig) -> Self {
        let client = MockClient::seeded(Latency::from_flag(config.simulate_latency));
        let preferences = PreferenceStore::load(config.preferences_path.clone()).await;
        Self::from_parts(config, client, preferences)
    }

    /// Assemble state from already-built parts.
    #[must_use]
    pub fn from_parts(
        config: ServerConfig,
        client: MockClient,
        preferences: PreferenceStore,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                client,
                preferences,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the mock store client.
    #[must_use]
    pub fn client(&self) -> &MockClient {
        &self.inner.client
    }

    /// Get a reference to the preference store.
    #[must_use]
    pub fn preferences(&self) -> &PreferenceStore {
        &self.inner.preferences
    }
}
