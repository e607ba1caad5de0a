//! Picks the file that stands in for each asset cluster of a listing.
//!
//! A cluster is a directory holding every derivative of one photo or video.
//! Resolution tries, in order and stopping at the first hit:
//!
//! 1. the full-size render (`FullSizeRender.mov` / `FullSizeRender.jpg`),
//! 2. the primary asset named after the cluster, recovering the original
//!    name from the archive renaming scheme when parsing fails under
//!    `/archive`,
//! 3. the cluster directory itself.
//!
//! Misses in the first two tiers are never errors.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::ListingConfig;
use crate::dav_path;
use crate::error::AppError;
use crate::models::collection::Collection;
use crate::models::item_status::ItemStatus;
use crate::models::multistatus::StatusRecord;
use crate::models::request::PropFind;
use crate::services::propfind_service;
use crate::services::resolver_service::{self, AssetResolver};
use crate::services::storage_service::Storage;

pub struct AssetListing {
    storage: Arc<dyn Storage>,
    resolver: Arc<dyn AssetResolver>,
    config: ListingConfig,
}

impl AssetListing {
    pub fn new(
        storage: Arc<dyn Storage>,
        resolver: Arc<dyn AssetResolver>,
        config: ListingConfig,
    ) -> Self {
        Self {
            storage,
            resolver,
            config,
        }
    }

    /// Resolves every child and converts it into a response record.
    /// The first conversion failure fails the whole listing.
    pub async fn resolve_listing(
        &self,
        collection: Collection,
        children: Vec<ItemStatus>,
        propfind: &PropFind,
    ) -> Result<Vec<StatusRecord>, AppError> {
        let items = self.resolve(collection, children).await?;
        items
            .iter()
            .map(|item| propfind_service::propfind_item(propfind, item))
            .collect()
    }

    /// Representative item per child, same length and order as `children`.
    pub async fn resolve(
        &self,
        collection: Collection,
        children: Vec<ItemStatus>,
    ) -> Result<Vec<ItemStatus>, AppError> {
        let total = children.len();
        let parallelism = self.config.max_concurrent_resolutions.max(1).min(total);
        if parallelism <= 1 {
            let mut items = Vec::with_capacity(total);
            for child in children {
                items.push(
                    representative_item(
                        self.storage.as_ref(),
                        self.resolver.as_ref(),
                        collection,
                        child,
                    )
                    .await,
                );
            }
            return Ok(items);
        }

        let semaphore = Arc::new(Semaphore::new(parallelism));
        let mut join_set: JoinSet<(usize, ItemStatus)> = JoinSet::new();

        for (index, child) in children.into_iter().enumerate() {
            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|_| AppError::General("resolution worker pool closed".to_string()))?;
            let storage = self.storage.clone();
            let resolver = self.resolver.clone();

            join_set.spawn(async move {
                let _permit = permit;
                let item =
                    representative_item(storage.as_ref(), resolver.as_ref(), collection, child)
                        .await;
                (index, item)
            });
        }

        let mut ordered: Vec<Option<ItemStatus>> = (0..total).map(|_| None).collect();
        while let Some(joined) = join_set.join_next().await {
            let (index, item) = joined.map_err(|join_err| {
                AppError::General(format!("cluster resolution task failed: {join_err}"))
            })?;
            ordered[index] = Some(item);
        }

        ordered
            .into_iter()
            .map(|slot| {
                slot.ok_or_else(|| AppError::General("cluster resolution incomplete".to_string()))
            })
            .collect()
    }
}

/// The item that represents `child` in a listing of `collection`.
pub async fn representative_item(
    storage: &dyn Storage,
    resolver: &dyn AssetResolver,
    collection: Collection,
    child: ItemStatus,
) -> ItemStatus {
    if !child.is_dir || dav_path::normalize(&child.path) == collection.path() {
        return child;
    }

    if let Some(render) = render_lookup(storage, resolver, &child.path).await {
        return render;
    }
    if let Some(primary) =
        primary_asset_lookup(storage, resolver, collection, &child.path).await
    {
        return primary;
    }

    log::debug!("[resolve] no representative in {}, keeping cluster", child.path);
    child
}

async fn render_lookup(
    storage: &dyn Storage,
    resolver: &dyn AssetResolver,
    cluster_path: &str,
) -> Option<ItemStatus> {
    let kind = resolver_service::classify(resolver, cluster_path)?;
    let render_path = dav_path::join(cluster_path, kind.render_name());
    match storage.stat(&render_path).await {
        Ok(item) => Some(item),
        Err(err) => {
            log::debug!("[resolve] render miss {render_path}: {err}");
            None
        }
    }
}

async fn primary_asset_lookup(
    storage: &dyn Storage,
    resolver: &dyn AssetResolver,
    collection: Collection,
    cluster_path: &str,
) -> Option<ItemStatus> {
    let cluster_name = dav_path::base_name(cluster_path);
    let name = match resolver.parse_canonical_asset_name(cluster_name) {
        Ok((_, name)) => name,
        Err(err) if collection == Collection::Archive => {
            log::debug!("[resolve] {err}, trying archive recovery");
            resolver.recover_original_name_from_archive_name(cluster_name)
        }
        Err(err) => {
            log::debug!("[resolve] {err}");
            return None;
        }
    };
    if name.is_empty() {
        return None;
    }

    let asset_path = dav_path::join(cluster_path, &name);
    match storage.stat(&asset_path).await {
        Ok(item) => Some(item),
        Err(err) => {
            log::debug!("[resolve] primary asset miss {asset_path}: {err}");
            None
        }
    }
}
