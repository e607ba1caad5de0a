pub const MAX_CONCURRENT_RESOLUTIONS_ENV: &str = "PHASSET_MAX_CONCURRENT_RESOLUTIONS";
const DEFAULT_MAX_CONCURRENT_RESOLUTIONS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingConfig {
    /// Upper bound on clusters resolved at once. 1 resolves sequentially.
    pub max_concurrent_resolutions: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_concurrent_resolutions: DEFAULT_MAX_CONCURRENT_RESOLUTIONS,
        }
    }
}

impl ListingConfig {
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(MAX_CONCURRENT_RESOLUTIONS_ENV).ok().as_deref())
    }

    fn from_value(raw: Option<&str>) -> Self {
        let max_concurrent_resolutions = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_CONCURRENT_RESOLUTIONS)
            .max(1);
        Self {
            max_concurrent_resolutions,
        }
    }

    pub fn sequential() -> Self {
        Self {
            max_concurrent_resolutions: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_value_uses_default() {
        assert_eq!(ListingConfig::from_value(None), ListingConfig::default());
        assert_eq!(ListingConfig::from_value(Some("  ")), ListingConfig::default());
        assert_eq!(ListingConfig::from_value(Some("many")), ListingConfig::default());
    }

    #[test]
    fn zero_is_clamped_to_one() {
        assert_eq!(
            ListingConfig::from_value(Some("0")).max_concurrent_resolutions,
            1
        );
        assert_eq!(
            ListingConfig::from_value(Some(" 16 ")).max_concurrent_resolutions,
            16
        );
    }
}
