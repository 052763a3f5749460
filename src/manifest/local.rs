use super::{ManifestStore, ProjectManifest, MANIFEST_FILE};
use crate::core::{ScaffoldError, ScaffoldResult};
use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

/// ローカルファイルシステム上の package.json を扱うストア
#[derive(Debug, Clone, Default)]
pub struct FsManifestStore;

impl FsManifestStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ManifestStore for FsManifestStore {
    async fn read(&self, dir: &Path) -> ScaffoldResult<ProjectManifest> {
        let path = dir.join(MANIFEST_FILE);
        debug!(path = %path.display(), "reading manifest");

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;

        ProjectManifest::parse(&text).map_err(|source| ScaffoldError::InvalidManifest { path, source })
    }

    async fn write(&self, dir: &Path, manifest: &ProjectManifest) -> ScaffoldResult<()> {
        let path = dir.join(MANIFEST_FILE);
        debug!(path = %path.display(), "writing manifest");

        tokio::fs::write(&path, manifest.to_pretty_json())
            .await
            .map_err(|e| ScaffoldError::io(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = tempdir().unwrap();
        let store = FsManifestStore::new();
        let manifest = ProjectManifest::placeholder("demo");

        store.write(temp_dir.path(), &manifest).await.unwrap();
        let loaded = store.read(temp_dir.path()).await.unwrap();

        assert_eq!(loaded, manifest);
        assert!(temp_dir.path().join("package.json").is_file());
    }

    #[tokio::test]
    async fn test_read_missing_manifest() {
        let temp_dir = tempdir().unwrap();
        let store = FsManifestStore::new();

        let error = store.read(temp_dir.path()).await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("package.json"));
    }

    #[tokio::test]
    async fn test_read_invalid_json() {
        let temp_dir = tempdir().unwrap();
        std::fs::write(temp_dir.path().join("package.json"), "{ not json").unwrap();

        let error = FsManifestStore::new().read(temp_dir.path()).await.unwrap_err();

        assert!(matches!(error, ScaffoldError::InvalidManifest { .. }));
    }
}
