use serde::{Deserialize, Serialize};

/// Top-level backup roots served by the asset listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collection {
    /// Active backup.
    Current,
    /// Archived backup; its clusters may carry renamed directory names.
    Archive,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Current, Collection::Archive];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Current => "/current",
            Self::Archive => "/archive",
        }
    }

    /// Exact match only; subpaths of a collection are not collections.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.path() == path)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_matches_roots_only() {
        assert_eq!(Collection::from_path("/current"), Some(Collection::Current));
        assert_eq!(Collection::from_path("/archive"), Some(Collection::Archive));
        assert_eq!(Collection::from_path("/archive/IMG_0001"), None);
        assert_eq!(Collection::from_path("/current/"), None);
        assert_eq!(Collection::from_path("/other"), None);
    }
}
