use api::config::ApiConfig;
use api::conversion::HttpConversionClient;
use api::number_format::NumberLocale;
use std::ops::Deref;
use std::sync::Arc;

use crate::compat;

#[derive(Debug)]
pub struct AppStateData {
    pub client: HttpConversionClient,
    pub locale: NumberLocale,
}

/// Shared, non-reactive state built once when the app loads.
#[derive(Clone, Debug)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let locale = compat::browser_language()
            .map(|tag| NumberLocale::from_language_tag(&tag))
            .unwrap_or_default();

        Self(Arc::new(AppStateData {
            client: HttpConversionClient::new(config, compat::current_origin()),
            locale,
        }))
    }
}
