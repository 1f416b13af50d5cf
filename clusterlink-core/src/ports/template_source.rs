// clusterlink-core/src/ports/template_source.rs

use crate::error::ClusterlinkError;
use async_trait::async_trait;

/// Where the pristine session config comes from the first time we need it.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Human readable location (URL or path), for logs.
    fn location(&self) -> String;

    /// Raw bytes exactly as served.
    async fn fetch(&self) -> Result<Vec<u8>, ClusterlinkError>;
}
