use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use yansi::Paint;

use super::droplets::{DropletPages, ListOptions};
use super::error::ApiError;
use crate::models::DropletPage;
use crate::utils::absolute_url;

/// Access token handed to the signing transport.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token").field("access_token", &"<redacted>").finish()
    }
}

/// Supplies the bearer token for each request.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Result<Token, ApiError>;
}

/// A token source that never expires and never refreshes.
#[derive(Clone)]
pub struct StaticTokenSource {
    access_token: String,
}

impl StaticTokenSource {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl TokenSource for StaticTokenSource {
    fn token(&self) -> Result<Token, ApiError> {
        Ok(Token {
            access_token: self.access_token.clone(),
        })
    }
}

/// HTTP client for the DigitalOcean v2 API that signs every request with
/// the token from its [`TokenSource`].
pub struct DropletClient<S = StaticTokenSource> {
    client: reqwest::Client,
    api_base_url: String,
    token_source: S,
}

impl DropletClient<StaticTokenSource> {
    /// Wrap `access_token` in a static token source and build a client for
    /// `api_base_url`.
    pub fn authenticate(access_token: &str, api_base_url: &str) -> Result<Self, ApiError> {
        Self::with_token_source(StaticTokenSource::new(access_token), api_base_url)
    }
}

impl<S: TokenSource> DropletClient<S> {
    pub fn with_token_source(token_source: S, api_base_url: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(format!("droplet-tray/{}", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_base_url: crate::config::sanitize_base_url(api_base_url),
            token_source,
        })
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    async fn get_page(&self, opts: &ListOptions) -> Result<DropletPage, ApiError> {
        let url = absolute_url(&self.api_base_url, "/v2/droplets");
        let params = opts.query_params();
        log_request("GET", &url, &params);

        let token = self.token_source.token()?;
        let response = self
            .client
            .get(&url)
            .bearer_auth(&token.access_token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = api_error_message(&text).unwrap_or_else(|| {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            });
            tracing::warn!(status = status.as_u16(), %message, "Droplet listing rejected");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl<S: TokenSource> DropletPages for DropletClient<S> {
    fn list_page(
        &self,
        opts: &ListOptions,
    ) -> impl std::future::Future<Output = Result<DropletPage, ApiError>> + Send {
        self.get_page(opts)
    }
}

/// DigitalOcean error bodies look like `{"id": "unauthorized", "message": "..."}`.
fn api_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message").and_then(|m| m.as_str()).map(str::to_string)
}

/// Log the outgoing request as a curl command line. The token is never printed.
fn log_request(method: &str, url: &str, params: &[(&str, String)]) {
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<String>>()
        .join("&");
    let full_url = if query.is_empty() {
        url.to_string()
    } else {
        format!("{}?{}", url, query)
    };

    let parts = [
        Paint::new("curl").green().bold().to_string(),
        format!("-X {}", Paint::new(method).yellow().bold()),
        format!("'{}'", Paint::new(&full_url).cyan()),
        format!(
            "{} {}",
            Paint::new("-H").magenta(),
            Paint::new("'Authorization: Bearer <redacted>'").magenta()
        ),
    ];
    tracing::debug!("Request: {}", parts.join(" "));
}
