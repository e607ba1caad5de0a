use crate::error::AppError;
use crate::models::collection::Collection;
use crate::models::item_status::ItemStatus;
use crate::models::request::{Depth, ListingRequest};
use crate::services::storage_service::Storage;

/// Checks that a listing targets the root of a collection at depth 1.
///
/// The target is stat'ed before anything else and a stat failure is returned
/// unchanged. On success the collection and the target's status are returned.
pub async fn validate(
    storage: &dyn Storage,
    request: &ListingRequest,
) -> Result<(Collection, ItemStatus), AppError> {
    let target = storage.stat(&request.path).await?;

    if !target.is_dir {
        return Err(AppError::InvalidParams(format!(
            "not a directory: {}",
            request.path
        )));
    }
    if request.depth != Depth::One {
        return Err(AppError::InvalidParams(format!(
            "unsupported depth: {}",
            request.depth
        )));
    }
    let collection = Collection::from_path(&request.path).ok_or_else(|| {
        AppError::InvalidParams(format!("not a collection root: {}", request.path))
    })?;

    Ok((collection, target))
}
