//! Settings that tell the widget where the conversion API lives.

use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Connection settings for the conversion backend.
///
/// Built once when the app starts and handed to every request through the
/// conversion client.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    api_key: String,
    api_endpoint: String,
    api_env: String,
}

impl ApiConfig {
    /// Creates a config, trimming all values.
    ///
    /// A non-empty endpoint always ends with `/`. An empty endpoint means
    /// the API is served from the same origin as the page.
    pub fn new(
        api_key: impl AsRef<str>,
        api_endpoint: impl AsRef<str>,
        api_env: impl AsRef<str>,
    ) -> Self {
        let api_endpoint = api_endpoint.as_ref().trim();
        let api_endpoint = if api_endpoint.is_empty() || api_endpoint.ends_with('/') {
            api_endpoint.to_string()
        } else {
            format!("{}/", api_endpoint)
        };

        Self {
            api_key: api_key.as_ref().trim().to_string(),
            api_endpoint,
            api_env: api_env.as_ref().trim().to_string(),
        }
    }

    /// Creates an ApiConfig from environment variables.
    ///
    /// # Environment Variables
    /// - `APP_API_KEY`: sent as `X-APIKEY` on every request when non-empty.
    /// - `APP_API_ENDPOINT`: base URL of the API. Defaults to the page origin.
    /// - `APP_API_ENV`: path segment inserted before `/api/v1/convert`.
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).unwrap_or_default();
        Self::new(
            var("APP_API_KEY"),
            var("APP_API_ENDPOINT"),
            var("APP_API_ENV"),
        )
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    pub fn api_env(&self) -> &str {
        &self.api_env
    }

    /// Resolves the base URL, falling back to the page origin when no
    /// endpoint is configured.
    pub fn endpoint_or(&self, origin: Option<&str>) -> Option<String> {
        if !self.api_endpoint.is_empty() {
            return Some(self.api_endpoint.clone());
        }
        origin
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| format!("{}/", o.trim_end_matches('/')))
    }
}
