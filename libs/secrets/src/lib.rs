//! # Secrets
//!
//! Layered secret resolution for services that need signing keys and
//! credentials at startup.
//!
//! ```text
//! get_secret("JWT_SECRET_KEY")
//!   1. in-memory cache (if enabled)
//!   2. FileProvider   -> reads the path in JWT_SECRET_KEY_FILE
//!   3. EnvProvider    -> reads JWT_SECRET_KEY
//!   4. SecretsError::NotFound
//! ```
//!
//! ```rust,ignore
//! use secrets::{SecretsClient, SecretsConfig};
//!
//! let client = SecretsClient::new(SecretsConfig::from_env());
//! let key = client.require_secret("JWT_SECRET_KEY").await?;
//! ```

mod config;
mod error;
mod provider;

pub mod providers;

pub use config::SecretsConfig;
pub use error::SecretsError;
pub use provider::SecretsProvider;

use providers::{EnvProvider, FileProvider};
use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Resolves secrets through an ordered chain of providers
pub struct SecretsClient {
    providers: Vec<Arc<dyn SecretsProvider>>,
    cache: Arc<RwLock<HashMap<String, Secret<String>>>>,
    cache_enabled: bool,
}

impl SecretsClient {
    pub fn new(config: SecretsConfig) -> Self {
        let mut providers: Vec<Arc<dyn SecretsProvider>> = Vec::new();
        if config.files_enabled {
            providers.push(Arc::new(FileProvider::new()));
        }
        providers.push(Arc::new(EnvProvider::new()));

        Self::with_providers(providers, config.cache_enabled)
    }

    pub fn env_only() -> Self {
        Self::new(SecretsConfig::env_only())
    }

    /// Providers are consulted in order; the first hit wins.
    pub fn with_providers(providers: Vec<Arc<dyn SecretsProvider>>, cache_enabled: bool) -> Self {
        Self {
            providers,
            cache: Arc::new(RwLock::new(HashMap::new())),
            cache_enabled,
        }
    }

    /// Get a secret, failing if no provider has it.
    pub async fn require_secret(&self, key: &str) -> Result<Secret<String>, SecretsError> {
        self.get_secret_optional(key)
            .await?
            .ok_or_else(|| SecretsError::NotFound(key.to_string()))
    }

    /// Get a secret by key, returning `None` if no provider has it.
    ///
    /// A provider error stops the chain: a misconfigured `KEY_FILE` must not
    /// silently fall through to a stale environment value.
    pub async fn get_secret_optional(&self, key: &str) -> Result<Option<Secret<String>>, SecretsError> {
        if self.cache_enabled {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.get(key) {
                debug!(key = %key, "Secret retrieved from cache");
                return Ok(Some(Secret::new(cached.expose_secret().clone())));
            }
        }

        for provider in &self.providers {
            match provider.get_secret(key).await {
                Ok(Some(value)) => {
                    debug!(key = %key, provider = provider.name(), "Secret retrieved");
                    self.cache_secret(key, &value).await;
                    return Ok(Some(value));
                }
                Ok(None) => {
                    debug!(key = %key, provider = provider.name(), "Secret not found, trying next provider");
                }
                Err(e) => {
                    warn!(key = %key, provider = provider.name(), error = %e, "Secret provider failed");
                    return Err(e);
                }
            }
        }

        debug!(key = %key, "Secret not found in any provider");
        Ok(None)
    }

    /// Clear the cache (useful for secret rotation)
    pub async fn clear_cache(&self) {
        self.cache.write().await.clear();
        info!("Secrets cache cleared");
    }

    async fn cache_secret(&self, key: &str, value: &Secret<String>) {
        if self.cache_enabled {
            let mut cache = self.cache.write().await;
            cache.insert(key.to_string(), Secret::new(value.expose_secret().clone()));
        }
    }
}
