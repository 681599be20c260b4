use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::uploads::FileStore,
};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Local-disk blob store. Files land under `<root>/<category>/` with a
/// random name; the returned path is relative to the `/uploads` mount.
#[derive(Clone)]
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn sanitized_extension(original_name: &str) -> Option<&str> {
    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn store(
        &self,
        category: &str,
        original_name: &str,
        bytes: Bytes,
    ) -> ApplicationResult<String> {
        let file_name = match sanitized_extension(original_name) {
            Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
            None => Uuid::new_v4().to_string(),
        };

        let dir = self.root.join(category);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        tokio::fs::write(dir.join(&file_name), &bytes)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(format!("/uploads/{category}/{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_kept_when_simple() {
        assert_eq!(sanitized_extension("photo.JPG"), Some("JPG"));
        assert_eq!(sanitized_extension("archive.tar.gz"), Some("gz"));
    }

    #[test]
    fn suspicious_extensions_are_dropped() {
        assert_eq!(sanitized_extension("noext"), None);
        assert_eq!(sanitized_extension("weird.a/b"), None);
        assert_eq!(sanitized_extension("long.extension-name!"), None);
    }
}
