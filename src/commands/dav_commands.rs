use std::sync::Arc;

use crate::config::ListingConfig;
use crate::error::AppError;
use crate::models::multistatus::{MultiStatus, StatusRecord};
use crate::models::request::{DavMethod, ListingRequest};
use crate::services::asset_service::AssetListing;
use crate::services::gate_service;
use crate::services::resolver_service::AssetResolver;
use crate::services::storage_service::Storage;

/// Serves asset-level PROPFIND listings of `/current` and `/archive`.
///
/// Every other WebDAV verb is answered with [`AppError::NotImplemented`];
/// the dispatching layer must route those elsewhere.
pub struct AssetHandler {
    storage: Arc<dyn Storage>,
    listing: AssetListing,
}

impl AssetHandler {
    pub fn new(storage: Arc<dyn Storage>, resolver: Arc<dyn AssetResolver>) -> Self {
        Self::with_config(storage, resolver, ListingConfig::from_env())
    }

    pub fn with_config(
        storage: Arc<dyn Storage>,
        resolver: Arc<dyn AssetResolver>,
        config: ListingConfig,
    ) -> Self {
        let listing = AssetListing::new(storage.clone(), resolver, config);
        Self { storage, listing }
    }

    pub async fn handle(
        &self,
        method: DavMethod,
        request: &ListingRequest,
    ) -> Result<MultiStatus, AppError> {
        match method {
            DavMethod::Propfind => self.propfind(request).await,
            other => Err(AppError::NotImplemented(other)),
        }
    }

    pub async fn propfind(&self, request: &ListingRequest) -> Result<MultiStatus, AppError> {
        let (collection, _) = gate_service::validate(self.storage.as_ref(), request).await?;

        let children = self.storage.read_dir(&request.path, false).await?;
        let responses = self
            .listing
            .resolve_listing(collection, children, &request.propfind)
            .await?;

        log::info!("[propfind] {collection}: {} items", responses.len());
        Ok(MultiStatus::new(responses))
    }

    pub fn options(&self, _path: &str) -> Result<(Vec<String>, Vec<String>), AppError> {
        Err(AppError::NotImplemented(DavMethod::Options))
    }

    pub fn head_get(&self, _path: &str, head: bool) -> Result<Vec<u8>, AppError> {
        let method = if head { DavMethod::Head } else { DavMethod::Get };
        Err(AppError::NotImplemented(method))
    }

    pub fn put(&self, _path: &str, _body: &[u8]) -> Result<(), AppError> {
        Err(AppError::NotImplemented(DavMethod::Put))
    }

    pub fn delete(&self, _path: &str) -> Result<(), AppError> {
        Err(AppError::NotImplemented(DavMethod::Delete))
    }

    pub fn mkcol(&self, _path: &str) -> Result<(), AppError> {
        Err(AppError::NotImplemented(DavMethod::Mkcol))
    }

    pub fn copy(
        &self,
        _path: &str,
        _dest: &str,
        _recursive: bool,
        _overwrite: bool,
    ) -> Result<bool, AppError> {
        Err(AppError::NotImplemented(DavMethod::Copy))
    }

    pub fn move_to(&self, _path: &str, _dest: &str, _overwrite: bool) -> Result<bool, AppError> {
        Err(AppError::NotImplemented(DavMethod::Move))
    }

    pub fn proppatch(&self, _path: &str) -> Result<StatusRecord, AppError> {
        Err(AppError::NotImplemented(DavMethod::Proppatch))
    }
}
