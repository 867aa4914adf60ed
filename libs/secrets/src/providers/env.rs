//! Environment variable secrets provider

use async_trait::async_trait;
use secrecy::Secret;

use crate::{SecretsError, SecretsProvider};

/// Reads `KEY` from the process environment. Blank values count as unset.
#[derive(Debug, Default)]
pub struct EnvProvider;

impl EnvProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SecretsProvider for EnvProvider {
    async fn get_secret(&self, key: &str) -> Result<Option<Secret<String>>, SecretsError> {
        match std::env::var(key) {
            Ok(value) if value.trim().is_empty() => Ok(None),
            Ok(value) => Ok(Some(Secret::new(value))),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(SecretsError::EnvError(format!(
                "Environment variable '{key}' contains invalid UTF-8"
            ))),
        }
    }

    fn name(&self) -> &'static str {
        "environment"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[tokio::test]
    async fn test_get_existing_env_var() {
        std::env::set_var("SECRETS_ENV_PROVIDER_VAR", "signing-key");

        let secret = EnvProvider::new()
            .get_secret("SECRETS_ENV_PROVIDER_VAR")
            .await
            .unwrap();
        assert_eq!(secret.unwrap().expose_secret(), "signing-key");

        std::env::remove_var("SECRETS_ENV_PROVIDER_VAR");
    }

    #[tokio::test]
    async fn test_blank_env_var_returns_none() {
        std::env::set_var("SECRETS_BLANK_VAR", "   ");

        let result = EnvProvider::new().get_secret("SECRETS_BLANK_VAR").await.unwrap();
        assert!(result.is_none());

        std::env::remove_var("SECRETS_BLANK_VAR");
    }
}
