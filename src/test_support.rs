use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::dav_path;
use crate::error::AppError;
use crate::models::item_status::ItemStatus;
use crate::services::resolver_service::{AssetKind, AssetResolver};
use crate::services::storage_service::{MemoryStorage, Storage};

/// Resolver driven by lookup tables keyed on cluster directory names.
#[derive(Default)]
pub struct TableResolver {
    videos: HashSet<String>,
    images: HashSet<String>,
    canonical: HashMap<String, (AssetKind, String)>,
    archived: HashMap<String, String>,
    recover_calls: AtomicUsize,
}

impl TableResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video(mut self, cluster: &str) -> Self {
        self.videos.insert(cluster.to_string());
        self
    }

    pub fn image(mut self, cluster: &str) -> Self {
        self.images.insert(cluster.to_string());
        self
    }

    pub fn canonical(mut self, cluster: &str, kind: AssetKind, name: &str) -> Self {
        self.canonical
            .insert(cluster.to_string(), (kind, name.to_string()));
        self
    }

    pub fn archived(mut self, cluster: &str, name: &str) -> Self {
        self.archived.insert(cluster.to_string(), name.to_string());
        self
    }

    pub fn recover_calls(&self) -> usize {
        self.recover_calls.load(Ordering::Relaxed)
    }
}

impl AssetResolver for TableResolver {
    fn is_video_file(&self, cluster_path: &str) -> bool {
        self.videos.contains(dav_path::base_name(cluster_path))
    }

    fn is_image_file(&self, cluster_path: &str) -> bool {
        self.images.contains(dav_path::base_name(cluster_path))
    }

    fn parse_canonical_asset_name(
        &self,
        cluster_name: &str,
    ) -> Result<(AssetKind, String), AppError> {
        self.canonical
            .get(cluster_name)
            .cloned()
            .ok_or_else(|| AppError::NameParse(cluster_name.to_string()))
    }

    fn recover_original_name_from_archive_name(&self, cluster_name: &str) -> String {
        self.recover_calls.fetch_add(1, Ordering::Relaxed);
        self.archived.get(cluster_name).cloned().unwrap_or_default()
    }
}

/// Storage that serves from a [`MemoryStorage`] but fails chosen calls with
/// an I/O error.
pub struct FlakyStorage {
    inner: MemoryStorage,
    broken_stats: HashSet<String>,
    broken_read_dir: bool,
}

impl FlakyStorage {
    pub fn new(inner: MemoryStorage) -> Self {
        Self {
            inner,
            broken_stats: HashSet::new(),
            broken_read_dir: false,
        }
    }

    pub fn break_stat(mut self, path: &str) -> Self {
        self.broken_stats.insert(path.to_string());
        self
    }

    pub fn break_read_dir(mut self) -> Self {
        self.broken_read_dir = true;
        self
    }
}

fn disk_offline() -> AppError {
    AppError::Io(std::io::Error::other("disk offline"))
}

#[async_trait]
impl Storage for FlakyStorage {
    async fn stat(&self, path: &str) -> Result<ItemStatus, AppError> {
        if self.broken_stats.contains(path) {
            return Err(disk_offline());
        }
        self.inner.stat(path).await
    }

    async fn read_dir(&self, path: &str, recursive: bool) -> Result<Vec<ItemStatus>, AppError> {
        if self.broken_read_dir {
            return Err(disk_offline());
        }
        self.inner.read_dir(path, recursive).await
    }
}
