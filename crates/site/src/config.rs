//! Build-time site configuration.

/// Canonical origin used for absolute metadata URLs.
pub const SITE_BASE_URL: &str = "https://wfc.kumarx.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// Google Analytics measurement id; empty disables analytics.
    pub ga_measurement_id: &'static str,
    pub base_url: &'static str,
}

impl SiteConfig {
    /// Reads `WFC_GA_ID` at compile time.
    pub const fn from_env() -> Self {
        Self::with_ga_id(match option_env!("WFC_GA_ID") {
            Some(id) => id,
            None => "",
        })
    }

    pub const fn with_ga_id(ga_measurement_id: &'static str) -> Self {
        Self {
            ga_measurement_id,
            base_url: SITE_BASE_URL,
        }
    }

    pub fn analytics_enabled(&self) -> bool {
        !self.ga_measurement_id.trim().is_empty()
    }

    pub fn gtag_src(&self) -> String {
        format!(
            "https://www.googletagmanager.com/gtag/js?id={}",
            self.ga_measurement_id.trim()
        )
    }

    pub fn gtag_bootstrap(&self) -> String {
        format!(
            "window.dataLayer=window.dataLayer||[];\
             function gtag(){{dataLayer.push(arguments);}}\
             gtag('js',new Date());gtag('config','{}');",
            self.ga_measurement_id.trim()
        )
    }

    /// Absolute URL for a site-relative asset path.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
