//! Host configuration

/// Settings for the SSR host that Leptos options don't cover
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory served under `/assets`
    pub assets_dir: String,
    /// Tracing filter directive
    pub log_filter: String,
}

impl SiteConfig {
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            assets_dir: lookup("ASSETS_DIR").unwrap_or_else(|| "assets".to_string()),
            log_filter: lookup("RUST_LOG")
                .unwrap_or_else(|| "lcnc_www=debug,tower_http=debug".to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
