//! Naming capability injected into the asset listing.
//!
//! Cluster directories encode the asset type and original capture name in
//! their own names. The conventions differ per backup producer, so the engine
//! only talks to this trait and never inspects names itself.

use crate::error::AppError;

pub const VIDEO_RENDER_NAME: &str = "FullSizeRender.mov";
pub const IMAGE_RENDER_NAME: &str = "FullSizeRender.jpg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
}

impl AssetKind {
    pub fn render_name(&self) -> &'static str {
        match self {
            Self::Image => IMAGE_RENDER_NAME,
            Self::Video => VIDEO_RENDER_NAME,
        }
    }
}

pub trait AssetResolver: Send + Sync {
    /// Whether the cluster at `cluster_path` holds a video.
    fn is_video_file(&self, cluster_path: &str) -> bool;

    /// Whether the cluster at `cluster_path` holds a still image.
    fn is_image_file(&self, cluster_path: &str) -> bool;

    /// Maps a cluster directory name to its primary asset filename.
    fn parse_canonical_asset_name(&self, cluster_name: &str)
        -> Result<(AssetKind, String), AppError>;

    /// Recovers the original name from an archive-renamed cluster.
    /// Returns an empty string when nothing can be recovered.
    fn recover_original_name_from_archive_name(&self, cluster_name: &str) -> String;
}

/// Classifies a cluster, checking video before image.
pub fn classify(resolver: &dyn AssetResolver, cluster_path: &str) -> Option<AssetKind> {
    if resolver.is_video_file(cluster_path) {
        Some(AssetKind::Video)
    } else if resolver.is_image_file(cluster_path) {
        Some(AssetKind::Image)
    } else {
        None
    }
}
