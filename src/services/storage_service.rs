use std::collections::BTreeMap;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::dav_path;
use crate::error::AppError;
use crate::models::item_status::ItemStatus;

/// Backend that answers metadata queries for DAV paths.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Status of a single path. Missing paths yield [`AppError::NotFound`].
    async fn stat(&self, path: &str) -> Result<ItemStatus, AppError>;

    /// The directory itself followed by its children, in name order.
    /// With `recursive` the whole subtree is returned depth first.
    async fn read_dir(&self, path: &str, recursive: bool) -> Result<Vec<ItemStatus>, AppError>;
}

pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn local_path(&self, path: &str) -> Result<PathBuf, AppError> {
        dav_path::validate(path)?;
        let relative = dav_path::normalize(path);
        Ok(self.root.join(relative.trim_start_matches('/')))
    }

    fn walk<'a>(
        &'a self,
        path: String,
        recursive: bool,
        out: &'a mut Vec<ItemStatus>,
    ) -> Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'a>> {
        Box::pin(async move {
            let local = self.local_path(&path)?;
            let mut entries = tokio::fs::read_dir(&local)
                .await
                .map_err(|e| map_io_error(e, &path))?;

            let mut children = Vec::new();
            while let Some(entry) = entries.next_entry().await? {
                let name = entry.file_name().to_string_lossy().to_string();
                let metadata = entry.metadata().await?;
                children.push((name, metadata));
            }
            children.sort_by(|a, b| a.0.cmp(&b.0));

            for (name, metadata) in children {
                let child_path = dav_path::join(&path, &name);
                let is_dir = metadata.is_dir();
                out.push(status_from_metadata(child_path.clone(), &metadata));
                if recursive && is_dir {
                    self.walk(child_path, true, out).await?;
                }
            }
            Ok(())
        })
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn stat(&self, path: &str) -> Result<ItemStatus, AppError> {
        let local = self.local_path(path)?;
        let metadata = tokio::fs::metadata(&local)
            .await
            .map_err(|e| map_io_error(e, path))?;
        Ok(status_from_metadata(dav_path::normalize(path), &metadata))
    }

    async fn read_dir(&self, path: &str, recursive: bool) -> Result<Vec<ItemStatus>, AppError> {
        let root = self.stat(path).await?;
        if !root.is_dir {
            return Ok(vec![root]);
        }

        let dir_path = root.path.clone();
        let mut items = vec![root];
        self.walk(dir_path, recursive, &mut items).await?;
        Ok(items)
    }
}

fn map_io_error(err: std::io::Error, path: &str) -> AppError {
    if err.kind() == std::io::ErrorKind::NotFound {
        AppError::NotFound(path.to_string())
    } else {
        AppError::Io(err)
    }
}

fn status_from_metadata(path: String, metadata: &std::fs::Metadata) -> ItemStatus {
    let modified_at = metadata
        .modified()
        .ok()
        .map(chrono::DateTime::<chrono::Utc>::from);

    if metadata.is_dir() {
        let mut item = ItemStatus::dir(path);
        item.modified_at = modified_at;
        return item;
    }

    let size = metadata.len();
    let mut item = ItemStatus::file(path, size);
    item.modified_at = modified_at;
    item.etag = modified_at
        .and_then(|t| t.timestamp_nanos_opt())
        .map(|nanos| format!("{nanos:x}{size:x}"));
    item
}

/// In-memory tree keyed by normalized DAV path.
#[derive(Default)]
pub struct MemoryStorage {
    items: RwLock<BTreeMap<String, ItemStatus>>,
    stat_calls: AtomicUsize,
    read_dir_calls: AtomicUsize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        let storage = Self::default();
        storage.insert(ItemStatus::dir("/"));
        storage
    }

    /// Adds an item, creating missing parent directories.
    pub fn insert(&self, mut item: ItemStatus) {
        item.path = dav_path::normalize(&item.path);
        let mut items = self
            .items
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut parent = dav_path::parent(&item.path);
        while let Some(dir) = parent {
            parent = dav_path::parent(&dir);
            items
                .entry(dir.clone())
                .or_insert_with(|| ItemStatus::dir(dir));
        }
        items.insert(item.path.clone(), item);
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.insert(ItemStatus::dir(path));
        self
    }

    pub fn with_file(self, path: &str, size: u64) -> Self {
        self.insert(ItemStatus::file(path, size));
        self
    }

    pub fn stat_calls(&self) -> usize {
        self.stat_calls.load(Ordering::Relaxed)
    }

    pub fn read_dir_calls(&self) -> usize {
        self.read_dir_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn stat(&self, path: &str) -> Result<ItemStatus, AppError> {
        self.stat_calls.fetch_add(1, Ordering::Relaxed);
        let items = self
            .items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        items
            .get(&dav_path::normalize(path))
            .cloned()
            .ok_or_else(|| AppError::NotFound(path.to_string()))
    }

    async fn read_dir(&self, path: &str, recursive: bool) -> Result<Vec<ItemStatus>, AppError> {
        self.read_dir_calls.fetch_add(1, Ordering::Relaxed);
        let path = dav_path::normalize(path);
        let items = self
            .items
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let root = items
            .get(&path)
            .cloned()
            .ok_or_else(|| AppError::NotFound(path.clone()))?;
        if !root.is_dir {
            return Ok(vec![root]);
        }

        let prefix = if path == "/" { "/".to_string() } else { format!("{path}/") };
        let mut listing = vec![root];
        listing.extend(
            items
                .range(prefix.clone()..)
                .take_while(|(key, _)| key.starts_with(&prefix))
                .filter(|(key, _)| key.as_str() != path)
                .filter(|(key, _)| {
                    recursive || dav_path::parent(key).as_deref() == Some(path.as_str())
                })
                .map(|(_, item)| item.clone()),
        );
        Ok(listing)
    }
}
