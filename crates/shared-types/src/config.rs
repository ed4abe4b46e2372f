use serde::{Deserialize, Serialize};

/// Root structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
}

/// Server feature flags. Everything defaults to off so a missing or
/// unparseable config file yields a safe minimal server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
    #[serde(default)]
    pub registration: bool,
}

/// Freshness classification for a cached query payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Serve from cache, no fetch.
    Fresh,
    /// Serve as fallback, refetch in the foreground.
    Stale,
    /// Evict; fetch as if never cached.
    Expired,
}

/// Client-side cache policy, fixed at startup and injected by context.
///
/// Defaults: 5-minute freshness window, 10-minute retention, one retry,
/// no refetch on window refocus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CachePolicy {
    pub stale_after_secs: u64,
    pub retain_for_secs: u64,
    pub max_retries: u32,
    pub refetch_on_focus: bool,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_after_secs: 300,
            retain_for_secs: 600,
            max_retries: 1,
            refetch_on_focus: false,
        }
    }
}

impl CachePolicy {
    /// Classify a cache entry by its age in seconds.
    pub fn freshness(&self, age_secs: u64) -> Freshness {
        if age_secs < self.stale_after_secs {
            Freshness::Fresh
        } else if age_secs < self.retain_for_secs {
            Freshness::Stale
        } else {
            Freshness::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_startup_configuration() {
        let policy = CachePolicy::default();
        assert_eq!(policy.stale_after_secs, 300);
        assert_eq!(policy.retain_for_secs, 600);
        assert_eq!(policy.max_retries, 1);
        assert!(!policy.refetch_on_focus);
    }

    #[test]
    fn freshness_windows() {
        let policy = CachePolicy::default();
        assert_eq!(policy.freshness(0), Freshness::Fresh);
        assert_eq!(policy.freshness(299), Freshness::Fresh);
        assert_eq!(policy.freshness(300), Freshness::Stale);
        assert_eq!(policy.freshness(599), Freshness::Stale);
        assert_eq!(policy.freshness(600), Freshness::Expired);
        assert_eq!(policy.freshness(86_400), Freshness::Expired);
    }

    #[test]
    fn config_parses_from_toml() {
        let toml_str = r#"
            [features]
            telemetry = true
            registration = true
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(config.features.telemetry);
        assert!(config.features.registration);
    }

    #[test]
    fn missing_flags_default_off() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.features, FeatureFlags::default());
        assert!(!config.features.telemetry);
    }
}
