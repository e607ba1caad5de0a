use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata a storage backend reports for one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStatus {
    pub path: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified_at: Option<DateTime<Utc>>,
    pub mime_type: Option<String>,
    pub etag: Option<String>,
}

impl ItemStatus {
    pub fn dir(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size: 0,
            modified_at: None,
            mime_type: None,
            etag: None,
        }
    }

    pub fn file(path: impl Into<String>, size: u64) -> Self {
        let path = path.into();
        let mime_type = mime_guess::from_path(&path).first().map(|m| m.to_string());
        Self {
            path,
            is_dir: false,
            size,
            modified_at: None,
            mime_type,
            etag: None,
        }
    }

    pub fn with_modified(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = Some(modified_at);
        self
    }

    pub fn with_etag(mut self, etag: impl Into<String>) -> Self {
        self.etag = Some(etag.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_guesses_mime_from_extension() {
        let item = ItemStatus::file("/current/IMG_0001/FullSizeRender.jpg", 42);
        assert_eq!(item.mime_type.as_deref(), Some("image/jpeg"));
        assert!(!item.is_dir);

        let unknown = ItemStatus::file("/current/blob", 1);
        assert_eq!(unknown.mime_type, None);
    }

    #[test]
    fn dir_has_no_file_metadata() {
        let item = ItemStatus::dir("/archive/VID_0099");
        assert!(item.is_dir);
        assert_eq!(item.size, 0);
        assert_eq!(item.mime_type, None);
    }
}
