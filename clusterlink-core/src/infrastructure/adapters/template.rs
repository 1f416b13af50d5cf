// clusterlink-core/src/infrastructure/adapters/template.rs

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, instrument};

use crate::error::ClusterlinkError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::template_source::TemplateSource;

/// Downloads the example config with a plain GET.
pub struct HttpTemplateSource {
    url: String,
    client: reqwest::Client,
}

impl HttpTemplateSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl TemplateSource for HttpTemplateSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<u8>, ClusterlinkError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(InfrastructureError::TemplateUnavailable {
                url: self.url.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        // No charset decoding: the baseline must be the bytes as served.
        let body = response.bytes().await.map_err(InfrastructureError::Http)?;
        debug!(bytes = body.len(), "📥 Template downloaded");
        Ok(body.to_vec())
    }
}

/// Reads the template from disk (air-gapped hosts, tests).
pub struct FileTemplateSource {
    path: PathBuf,
}

impl FileTemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TemplateSource for FileTemplateSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, ClusterlinkError> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;
    use anyhow::Result;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_template_source_reads_verbatim() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("example_config.json");
        std::fs::write(&path, "{\"url\": \"http://localhost:8998\"}\n")?;

        let source = FileTemplateSource::new(&path);

        assert_eq!(source.fetch().await?, b"{\"url\": \"http://localhost:8998\"}\n");
        assert_eq!(source.location(), path.display().to_string());
        Ok(())
    }

    #[tokio::test]
    async fn test_file_template_source_missing_is_io_error() -> Result<()> {
        let dir = tempdir()?;
        let source = FileTemplateSource::new(dir.path().join("absent.json"));

        let err = source.fetch().await;
        assert!(matches!(
            err,
            Err(ClusterlinkError::Infrastructure(InfrastructureError::Io(_)))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_http_template_source_unreachable_is_http_error() {
        // Port 9 (discard) on loopback: nothing listens, connection is refused.
        let source = HttpTemplateSource::new("http://127.0.0.1:9/example_config.json");

        let err = source.fetch().await;
        assert!(matches!(
            err,
            Err(ClusterlinkError::Infrastructure(InfrastructureError::Http(_)))
        ));
    }

    #[tokio::test]
    async fn test_http_template_source_keeps_served_bytes() -> Result<()> {
        // UTF-8 BOM and a Latin-1 byte: text decoding would alter both.
        let mut served = vec![0xef, 0xbb, 0xbf];
        served.extend_from_slice(b"{\"url\": \"http://localhost:8998\", \"owner\": \"");
        served.push(0xe9);
        served.extend_from_slice(b"\"}\n");
        let base = serve_once("200 OK", served.clone()).await?;

        let source = HttpTemplateSource::new(format!("{base}/example_config.json"));

        assert_eq!(source.fetch().await?, served);
        Ok(())
    }

    #[tokio::test]
    async fn test_http_template_source_non_success_status() -> Result<()> {
        let base = serve_once("404 Not Found", b"missing".to_vec()).await?;
        let source = HttpTemplateSource::new(format!("{base}/example_config.json"));

        let err = source.fetch().await;

        assert!(matches!(
            err,
            Err(ClusterlinkError::Infrastructure(
                InfrastructureError::TemplateUnavailable { status: 404, .. }
            ))
        ));
        Ok(())
    }
}
