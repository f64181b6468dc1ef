use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// A file received with a request, staged in its own temporary file.
///
/// The temporary file is owned exclusively by this value. [`Upload::release`]
/// consumes it, and dropping it on any other exit path (early return, panic
/// unwinding) removes the file as well, so storage is released exactly once.
#[derive(Debug)]
pub struct Upload {
    filename: String,
    size_bytes: u64,
    file: NamedTempFile,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("failed to stage upload: {0}")]
    Staging(io::Error),
    #[error("failed to read staged upload: {0}")]
    Read(io::Error),
    #[error("failed to release staged upload: {0}")]
    Release(io::Error),
}

impl Upload {
    pub fn create(filename: impl Into<String>) -> Result<Self, UploadError> {
        let file = tempfile::Builder::new()
            .prefix("upload-")
            .tempfile()
            .map_err(UploadError::Staging)?;

        Ok(Self {
            filename: filename.into(),
            size_bytes: 0,
            file,
        })
    }

    pub fn from_bytes(filename: impl Into<String>, data: &[u8]) -> Result<Self, UploadError> {
        let mut upload = Self::create(filename)?;
        upload
            .file
            .as_file_mut()
            .write_all(data)
            .map_err(UploadError::Staging)?;
        upload.size_bytes = data.len() as u64;
        Ok(upload)
    }

    /// Appends `chunk` while the staged size stays within `limit_bytes`.
    ///
    /// Bytes past the limit are counted but never written. Returns `false`
    /// once the limit has been exceeded so callers can stop reading.
    pub fn append_within_limit(
        &mut self,
        chunk: &[u8],
        limit_bytes: u64,
    ) -> Result<bool, UploadError> {
        let new_size = self.size_bytes + chunk.len() as u64;

        if new_size > limit_bytes {
            self.size_bytes = new_size;
            return Ok(false);
        }

        self.file
            .as_file_mut()
            .write_all(chunk)
            .map_err(UploadError::Staging)?;
        self.size_bytes = new_size;
        Ok(true)
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, UploadError> {
        tokio::fs::read(self.file.path())
            .await
            .map_err(UploadError::Read)
    }

    /// Deletes the backing temporary file.
    pub fn release(self) -> Result<(), UploadError> {
        self.file.close().map_err(UploadError::Release)
    }
}
