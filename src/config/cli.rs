use crate::core::Storage;
use crate::utils::error::Result;

/// Reads and writes paths as given, relative to the working directory.
/// Output lands next to an input that was just read, so no directories are
/// created.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        tokio::fs::write(path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        let path = path.to_str().unwrap();

        let storage = LocalStorage::new();
        storage.write_file(path, b"{}").await.unwrap();
        assert_eq!(storage.read_file(path).await.unwrap(), b"{}".to_vec());

        storage.write_file(path, b"[]").await.unwrap();
        assert_eq!(storage.read_file(path).await.unwrap(), b"[]".to_vec());
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        let err = LocalStorage::new()
            .read_file(path.to_str().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, crate::utils::error::ConvertError::IoError(_)));
    }

    #[tokio::test]
    async fn test_write_into_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent/out_for_review.json");

        let err = LocalStorage::new()
            .write_file(path.to_str().unwrap(), b"{}")
            .await
            .unwrap_err();
        assert!(matches!(err, crate::utils::error::ConvertError::IoError(_)));
        assert!(!temp_dir.path().join("absent").exists());
    }
}
