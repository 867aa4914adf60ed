//! Mounted-file secrets provider (`KEY_FILE=/run/secrets/key`)

use async_trait::async_trait;
use secrecy::Secret;

use crate::{SecretsError, SecretsProvider};

/// Resolves `KEY` by reading the file named in `KEY_FILE`. A single trailing
/// newline is stripped; the rest of the content is kept verbatim.
#[derive(Debug, Default)]
pub struct FileProvider;

impl FileProvider {
    pub fn new() -> Self {
        Self
    }

    fn path_variable(key: &str) -> String {
        format!("{key}_FILE")
    }
}

#[async_trait]
impl SecretsProvider for FileProvider {
    async fn get_secret(&self, key: &str) -> Result<Option<Secret<String>>, SecretsError> {
        let Ok(path) = std::env::var(Self::path_variable(key)) else {
            return Ok(None);
        };

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SecretsError::FileRead {
                path: path.clone(),
                source,
            })?;

        let value = content
            .strip_suffix("\r\n")
            .or_else(|| content.strip_suffix('\n'))
            .unwrap_or(&content);

        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(Secret::new(value.to_string())))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_file_and_strips_newline() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "from-file").unwrap();
        std::env::set_var("SECRETS_FILE_PROVIDER_FILE", file.path());

        let secret = FileProvider::new()
            .get_secret("SECRETS_FILE_PROVIDER")
            .await
            .unwrap();
        assert_eq!(secret.unwrap().expose_secret(), "from-file");

        std::env::remove_var("SECRETS_FILE_PROVIDER_FILE");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        std::env::set_var("SECRETS_FILE_MISSING_FILE", "/nonexistent/secret/path");

        let result = FileProvider::new().get_secret("SECRETS_FILE_MISSING").await;
        assert!(matches!(result, Err(SecretsError::FileRead { .. })));

        std::env::remove_var("SECRETS_FILE_MISSING_FILE");
    }

    #[tokio::test]
    async fn test_unset_path_variable_returns_none() {
        let result = FileProvider::new()
            .get_secret("SECRETS_FILE_NEVER_SET")
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
