//! Client for the backend currency-conversion endpoint.

use crate::config::ApiConfig;
use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Header carrying the API key on every outbound request.
pub const API_KEY_HEADER: &str = "X-APIKEY";

const CONVERT_PATH: &str = "api/v1/convert";

/// An amount of money in a given currency, as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub amount: f64,
    pub symbol: String,
}

/// The body returned by `GET /api/v1/convert`.
///
/// Only `output` is needed by the widget; the rest is kept for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    #[serde(default)]
    pub input: Option<CurrencyAmount>,
    pub output: CurrencyAmount,
    #[serde(default)]
    pub exchange_rate: Option<f64>,
}

/// What the user asked to convert.
///
/// `amount` is forwarded exactly as typed; the backend rejects bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub amount: String,
    pub symbol: String,
}

/// A failed conversion request.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("server responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl ConversionError {
    /// Whether retrying the same request later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::InvalidEndpoint(_) | Self::MalformedBody(_) => false,
        }
    }
}

/// Anything able to perform a currency conversion.
#[allow(async_fn_in_trait)]
pub trait ConversionClient {
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResponse, ConversionError>;
}

/// Talks to the conversion API over HTTP.
///
/// The underlying `reqwest::Client` is created once; the API key is
/// attached to each request here rather than through shared defaults.
#[derive(Clone, Debug)]
pub struct HttpConversionClient {
    http: reqwest::Client,
    config: ApiConfig,
    origin: Option<String>,
}

impl HttpConversionClient {
    /// `origin` is the page origin, used when the config has no endpoint.
    pub fn new(config: ApiConfig, origin: Option<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), config, origin)
    }

    pub fn with_http_client(
        http: reqwest::Client,
        config: ApiConfig,
        origin: Option<String>,
    ) -> Self {
        Self {
            http,
            config,
            origin,
        }
    }

    /// Builds `{endpoint}{env}/api/v1/convert?amount=..&symbol=..` with
    /// percent-encoded query values.
    pub fn convert_url(&self, request: &ConversionRequest) -> Result<reqwest::Url, ConversionError> {
        let base = self
            .config
            .endpoint_or(self.origin.as_deref())
            .ok_or_else(|| {
                ConversionError::InvalidEndpoint(
                    "no endpoint configured and page origin unknown".to_string(),
                )
            })?;
        let base = reqwest::Url::parse(&base)
            .map_err(|e| ConversionError::InvalidEndpoint(format!("{}: {}", base, e)))?;

        let env = self.config.api_env().trim_matches('/');
        let path = if env.is_empty() {
            CONVERT_PATH.to_string()
        } else {
            format!("{}/{}", env, CONVERT_PATH)
        };

        let mut url = base
            .join(&path)
            .map_err(|e| ConversionError::InvalidEndpoint(format!("{}{}: {}", base, path, e)))?;
        url.query_pairs_mut()
            .append_pair("amount", &request.amount)
            .append_pair("symbol", &request.symbol);
        Ok(url)
    }

    /// Prepares the GET request, including the API key header when one is set.
    pub fn build_request(
        &self,
        request: &ConversionRequest,
    ) -> Result<reqwest::RequestBuilder, ConversionError> {
        let mut builder = self.http.get(self.convert_url(request)?);
        if self.config.has_api_key() {
            builder = builder.header(API_KEY_HEADER, self.config.api_key());
        }
        Ok(builder)
    }
}

impl ConversionClient for HttpConversionClient {
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResponse, ConversionError> {
        let builder = self.build_request(request)?;
        debug!("converting {} {}", request.amount, request.symbol);

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ConversionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let conversion: ConversionResponse = serde_json::from_str(&body)?;
        if let Some(rate) = conversion.exchange_rate {
            debug!(
                "exchange rate {} -> {}: {}",
                request.symbol, conversion.output.symbol, rate
            );
        }
        Ok(conversion)
    }
}
