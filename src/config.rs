//! Page Configuration
//!
//! Settings read from `<meta>` tags of the host page:
//!
//! ```html
//! <meta name="patients-api-base" content="https://clinic.example.com">
//! <meta name="patients-log-level" content="debug">
//! ```

use log::LevelFilter;

const API_BASE_META: &str = "patients-api-base";
const LOG_LEVEL_META: &str = "patients-log-level";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Absolute base URL of the backend, without trailing `/`
    pub api_base: String,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Read configuration from the current document.
    ///
    /// Missing meta tags fall back to the page origin and `info`.
    pub fn from_document() -> Self {
        let window = web_sys::window();
        let origin = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let document = window.and_then(|w| w.document());
        let meta = |name: &str| {
            document.as_ref().and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{}\"]", name))
                    .ok()
                    .flatten()
                    .and_then(|el| el.get_attribute("content"))
            })
        };

        Self {
            api_base: resolve_api_base(meta(API_BASE_META).as_deref(), &origin),
            log_level: parse_log_level(meta(LOG_LEVEL_META).as_deref()),
        }
    }

    /// URL of the patient collection
    pub fn patients_url(&self) -> String {
        format!("{}/patients", self.api_base)
    }
}

/// Pick the configured base, or the page origin when none is set
pub fn resolve_api_base(configured: Option<&str>, origin: &str) -> String {
    let base = configured
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(origin);
    base.trim_end_matches('/').to_string()
}

pub fn parse_log_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
