//! Asset-level WebDAV listings for photo and video backup archives.
//!
//! A backup stores each photo or video as a directory of derivatives. A
//! PROPFIND on `/current` or `/archive` answers with one entry per asset,
//! pointing at the file that best represents it. Storage access and the
//! naming conventions of cluster directories are supplied by the embedder
//! through [`Storage`] and [`AssetResolver`].

pub mod commands;
pub mod config;
pub mod dav_path;
pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use commands::dav_commands::AssetHandler;
pub use config::ListingConfig;
pub use error::AppError;
pub use models::collection::Collection;
pub use models::item_status::ItemStatus;
pub use models::multistatus::{MultiStatus, PropStat, Property, StatusRecord};
pub use models::request::{DavMethod, Depth, ListingRequest, PropFind};
pub use services::resolver_service::{AssetKind, AssetResolver};
pub use services::storage_service::{LocalStorage, MemoryStorage, Storage};
