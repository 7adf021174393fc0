/*
[INPUT]:  HTTP configuration (base URL, timeouts, success code, credentials)
[OUTPUT]: reqwest-backed Transport executing request descriptors
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing envelope handling
*/

use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::transport::{RequestDescriptor, Transport};
use super::{AdminApiError, Result};

/// Default backend location
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// When set, bodies are `{code, msg, data}` envelopes and `code` must
    /// equal this value for the call to succeed.
    pub success_code: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            success_code: None,
        }
    }
}

/// Credentials for authenticated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Transport that talks to the backend over HTTP
#[derive(Debug)]
pub struct HttpTransport {
    http_client: Client,
    base_url: Url,
    success_code: Option<String>,
    credentials: RwLock<Option<Credentials>>,
}

impl HttpTransport {
    /// Create a transport with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a transport with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(AdminApiError::Config(format!(
                "base URL cannot carry paths: {}",
                config.base_url
            )));
        }

        Ok(Self {
            http_client,
            base_url,
            success_code: config.success_code,
            credentials: RwLock::new(None),
        })
    }

    /// Set credentials for authenticated requests
    pub fn set_credentials(&self, credentials: Credentials) {
        let mut guard = self
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(credentials);
    }

    /// Drop stored credentials
    pub fn clear_credentials(&self) {
        let mut guard = self
            .credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = None;
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<Credentials> {
        self.credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL, keeping any path prefix of the base URL
    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let endpoint = endpoint.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{endpoint}"))?)
    }

    fn build_request(&self, descriptor: &RequestDescriptor) -> Result<RequestBuilder> {
        let url = self.endpoint_url(&descriptor.url)?;
        let mut builder = self.http_client.request(descriptor.method.clone(), url);

        if let Some(credentials) = self.credentials() {
            builder = builder.bearer_auth(credentials.token);
        }
        if let Some(params) = &descriptor.params {
            builder = builder.query(&query_pairs(params)?);
        }
        if let Some(data) = &descriptor.data {
            builder = builder.json(data);
        }

        Ok(builder)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<Value> {
        let builder = self.build_request(&descriptor)?;
        debug!(method = %descriptor.method, url = %descriptor.url, "sending request");

        let response = builder.send().await.inspect_err(|err| {
            warn!(method = %descriptor.method, url = %descriptor.url, error = %err, "request failed");
        })?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            warn!(
                method = %descriptor.method,
                url = %descriptor.url,
                status = status.as_u16(),
                "request rejected"
            );
            return Err(AdminApiError::api_error(status, text));
        }

        let payload = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        match &self.success_code {
            Some(code) => unwrap_envelope(payload, code),
            None => Ok(payload),
        }
    }
}

/// Flatten a JSON params object into query pairs.
///
/// Null entries are dropped, arrays repeat their key, scalars are
/// stringified.
fn query_pairs(params: &Value) -> Result<Vec<(String, String)>> {
    let map = match params {
        Value::Null => return Ok(Vec::new()),
        Value::Object(map) => map,
        other => {
            return Err(AdminApiError::InvalidArgument(format!(
                "query params must be an object, got {other}"
            )));
        }
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|item| !item.is_null()) {
                    pairs.push((key.clone(), scalar_text(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_text(other))),
        }
    }
    Ok(pairs)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Unwrap a `{code, msg, data}` backend envelope
fn unwrap_envelope(payload: Value, success_code: &str) -> Result<Value> {
    let Value::Object(mut envelope) = payload else {
        return Err(AdminApiError::InvalidResponse(
            "expected backend envelope object".to_string(),
        ));
    };

    let code = match envelope.get("code") {
        Some(Value::String(code)) => code.clone(),
        Some(Value::Number(code)) => code.to_string(),
        _ => {
            return Err(AdminApiError::InvalidResponse(
                "backend envelope has no code".to_string(),
            ));
        }
    };

    if code == success_code {
        return Ok(envelope.remove("data").unwrap_or(Value::Null));
    }

    let message = envelope
        .get("msg")
        .or_else(|| envelope.get("message"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Err(AdminApiError::Backend { code, message })
}
