//! Binary file uploads
//!
//! Documents travel to the backend as multipart file parts. A `FileUpload`
//! holds the bytes together with the file name and content type the part is
//! sent with.

use std::fmt;
use std::path::Path;

use crate::error::CoreError;

/// A file selected for upload
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the content
    pub content_type: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload from in-memory content
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Reads an upload from disk, guessing the content type from the extension
    pub async fn read_from(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            CoreError::file(format!("Cannot read {}: {}", path.display(), e))
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| CoreError::file(format!("Not a file: {}", path.display())))?;

        Ok(Self {
            content_type: content_type_for(&file_name).to_string(),
            file_name,
            bytes,
        })
    }

    /// Size of the content in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the file has no content
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Bytes are left out of Debug so request logging never dumps documents.
impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Content type for the document formats the backend accepts
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}
