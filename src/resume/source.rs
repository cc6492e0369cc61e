//! Resume document inputs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Where a resume document comes from. Callers resolve uploads to one of
/// these before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Bytes already in memory, such as an upload, with its client file name.
    RawBytes {
        bytes: Vec<u8>,
        file_name: Option<String>,
    },
    /// A document on the local filesystem.
    FilePath(PathBuf),
}

/// Document formats the decoding strategies distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Text,
}

impl DocumentKind {
    /// Classify by file extension. Unknown extensions are treated as DOCX.
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => DocumentKind::Pdf,
            Some("txt") | Some("text") | Some("md") => DocumentKind::Text,
            _ => DocumentKind::Docx,
        }
    }
}

impl DocumentSource {
    pub fn from_bytes(bytes: Vec<u8>, file_name: Option<String>) -> Self {
        DocumentSource::RawBytes { bytes, file_name }
    }

    pub fn from_path<P: Into<PathBuf>>(path: P) -> Self {
        DocumentSource::FilePath(path.into())
    }

    /// The document kind. Raw bytes without a file name are assumed to be PDF.
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentSource::RawBytes {
                file_name: Some(name),
                ..
            } => DocumentKind::from_path(Path::new(name)),
            DocumentSource::RawBytes { file_name: None, .. } => DocumentKind::Pdf,
            DocumentSource::FilePath(path) => DocumentKind::from_path(path),
        }
    }

    /// Display name for logs.
    pub fn name(&self) -> String {
        match self {
            DocumentSource::RawBytes { file_name, .. } => file_name
                .clone()
                .unwrap_or_else(|| "<upload>".to_string()),
            DocumentSource::FilePath(path) => path.display().to_string(),
        }
    }

    /// Read the document bytes.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        match self {
            DocumentSource::RawBytes { bytes, .. } => Ok(bytes.clone()),
            DocumentSource::FilePath(path) => Ok(fs::read(path)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_detection() {
        assert_eq!(DocumentSource::from_path("cv.PDF").kind(), DocumentKind::Pdf);
        assert_eq!(DocumentSource::from_path("cv.txt").kind(), DocumentKind::Text);
        assert_eq!(DocumentSource::from_path("cv.docx").kind(), DocumentKind::Docx);
        assert_eq!(DocumentSource::from_path("cv").kind(), DocumentKind::Docx);
        assert_eq!(
            DocumentSource::from_bytes(vec![], None).kind(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentSource::from_bytes(vec![], Some("me.md".into())).kind(),
            DocumentKind::Text
        );
    }

    #[test]
    fn test_missing_file() {
        let source = DocumentSource::from_path("/nonexistent/cv.txt");
        assert!(source.read_bytes().is_err());
    }
}
