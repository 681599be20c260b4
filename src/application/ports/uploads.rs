use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

/// Blob storage for multipart uploads. `category` namespaces files
/// (`blogs`, `gallery`, `comments`, ...); the returned string is the path
/// the file is served from, e.g. `/uploads/blogs/<name>`.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(
        &self,
        category: &str,
        original_name: &str,
        bytes: Bytes,
    ) -> ApplicationResult<String>;
}
