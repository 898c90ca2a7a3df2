//! This crate contains the configuration, conversion client and shared
//! fullstack server functions used by the widget.

pub mod config;
pub mod conversion;
pub mod fiat_currency;
pub mod number_format;

use config::ApiConfig;
use dioxus::prelude::*;

pub type ApiError = anyhow::Error;

/// Retrieves the conversion API settings for the browser.
///
/// Values come from the server's environment (`APP_API_KEY`,
/// `APP_API_ENDPOINT`, `APP_API_ENV`) so a single build can target any
/// backend.
#[get("/api/config")]
pub async fn api_config() -> Result<ApiConfig, ApiError> {
    let config = ApiConfig::from_env();
    dioxus_logger::tracing::debug!(
        "serving api config: endpoint={:?} env={:?} key_set={}",
        config.api_endpoint(),
        config.api_env(),
        config.has_api_key()
    );
    Ok(config)
}
