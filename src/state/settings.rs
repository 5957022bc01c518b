//! Site settings: where the feed lives and where files are served from.
//!
//! Defaults come from the build environment. Native builds can override them
//! with environment variables. Debug web builds also accept URL query
//! parameters; release web builds use the build defaults only.

/// Content host serving cruise pages and archived files.
pub const DEFAULT_CONTENT_HOST: &str = "https://cchdo.ucsd.edu";

/// Site entry whose names label the cruises.
pub const DEFAULT_SITE_KEY: &str = "microstructure.ucsd.edu";

const FEED_URL_VAR: &str = "MICROSTRUCTURE_API_URL";
#[cfg(not(target_arch = "wasm32"))]
const CONTENT_HOST_VAR: &str = "MICROSTRUCTURE_CONTENT_HOST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Feed endpoint; `None` when nothing was configured.
    pub feed_url: Option<String>,
    /// Prefix joined verbatim with server-relative file paths.
    pub content_host: String,
    pub site_key: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            feed_url: option_env!("MICROSTRUCTURE_API_URL").map(str::to_string),
            content_host: DEFAULT_CONTENT_HOST.to_string(),
            site_key: DEFAULT_SITE_KEY.to_string(),
        }
    }
}

/// Run-time values taking precedence over the build defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub feed_url: Option<String>,
    pub content_host: Option<String>,
}

impl SiteSettings {
    /// Build defaults with run-time overrides applied.
    pub fn load() -> Self {
        let mut settings = Self::default();
        settings.apply(runtime_overrides());

        match &settings.feed_url {
            Some(url) => log::info!("Feed URL: {}", url),
            None => log::warn!("No feed URL configured ({} is unset)", FEED_URL_VAR),
        }
        log::info!("Content host: {}", settings.content_host);

        settings
    }

    /// Applies non-blank overrides. A trailing slash on the content host is
    /// dropped since file paths start with one.
    pub fn apply(&mut self, overrides: SettingsOverrides) {
        if let Some(url) = non_blank(overrides.feed_url) {
            self.feed_url = Some(url);
        }
        if let Some(host) = non_blank(overrides.content_host) {
            self.content_host = host.trim_end_matches('/').to_string();
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_overrides() -> SettingsOverrides {
    SettingsOverrides {
        feed_url: std::env::var(FEED_URL_VAR).ok(),
        content_host: std::env::var(CONTENT_HOST_VAR).ok(),
    }
}

/// Reads `?feed=` and `?host=` from the page URL.
#[cfg(target_arch = "wasm32")]
fn runtime_overrides() -> SettingsOverrides {
    let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
        return SettingsOverrides::default();
    };
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return SettingsOverrides::default();
    };

    page_overrides(
        SettingsOverrides {
            feed_url: params.get("feed"),
            content_host: params.get("host"),
        },
        QUERY_OVERRIDES_ENABLED,
    )
}

/// Page URL overrides are honored in debug builds only.
#[cfg(target_arch = "wasm32")]
const QUERY_OVERRIDES_ENABLED: bool = cfg!(debug_assertions);

#[cfg(any(test, target_arch = "wasm32"))]
fn page_overrides(query: SettingsOverrides, enabled: bool) -> SettingsOverrides {
    if enabled {
        return query;
    }
    if query != SettingsOverrides::default() {
        log::warn!("Ignoring feed/host URL parameters in a release build");
    }
    SettingsOverrides::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_cchdo() {
        let settings = SiteSettings::default();
        assert_eq!(settings.content_host, "https://cchdo.ucsd.edu");
        assert_eq!(settings.site_key, "microstructure.ucsd.edu");
    }

    #[test]
    fn test_overrides_replace_defaults() {
        let mut settings = SiteSettings::default();
        settings.apply(SettingsOverrides {
            feed_url: Some("https://cchdo.ucsd.edu/api/v1/cruise/microstructure".to_string()),
            content_host: Some("http://localhost:8000/".to_string()),
        });

        assert_eq!(
            settings.feed_url.as_deref(),
            Some("https://cchdo.ucsd.edu/api/v1/cruise/microstructure")
        );
        assert_eq!(settings.content_host, "http://localhost:8000");
    }

    #[test]
    fn test_page_overrides_apply_only_when_enabled() {
        let query = SettingsOverrides {
            feed_url: Some("https://staging.example/feed".to_string()),
            content_host: Some("https://staging.example".to_string()),
        };

        let mut settings = SiteSettings::default();
        settings.apply(page_overrides(query.clone(), false));
        assert_eq!(settings.content_host, DEFAULT_CONTENT_HOST);
        assert_eq!(settings.feed_url, SiteSettings::default().feed_url);

        settings.apply(page_overrides(query, true));
        assert_eq!(settings.content_host, "https://staging.example");
    }

    #[test]
    fn test_blank_overrides_are_ignored() {
        let mut settings = SiteSettings {
            feed_url: Some("http://feed".to_string()),
            ..SiteSettings::default()
        };
        settings.apply(SettingsOverrides {
            feed_url: Some("   ".to_string()),
            content_host: Some(String::new()),
        });

        assert_eq!(settings.feed_url.as_deref(), Some("http://feed"));
        assert_eq!(settings.content_host, DEFAULT_CONTENT_HOST);
    }
}
