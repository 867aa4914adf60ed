//! Configuration for the secrets client

/// Configuration for the secrets client
#[derive(Debug, Clone)]
pub struct SecretsConfig {
    /// Resolve `<KEY>_FILE` paths before plain environment variables
    pub files_enabled: bool,
    /// Whether to cache secrets in memory
    pub cache_enabled: bool,
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            files_enabled: true,
            cache_enabled: true,
        }
    }
}

fn flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

impl SecretsConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            files_enabled: flag("SECRETS_FILES_ENABLED", default.files_enabled),
            cache_enabled: flag("SECRETS_CACHE_ENABLED", default.cache_enabled),
        }
    }

    /// Plain environment variables, no cache
    pub fn env_only() -> Self {
        Self {
            files_enabled: false,
            cache_enabled: false,
        }
    }
}
