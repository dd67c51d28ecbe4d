//! HTTP Payments API
//!
//! reqwest-backed client for the payment backend. The anti-forgery token is
//! read from the `csrftoken` cookie in the shared cookie store and sent as
//! the `X-CSRFToken` header on every state-changing request.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, StatusCode, Url};
use uuid::Uuid;

use super::{PaymentCreated, PaymentsApi};
use crate::error::{PaymentError, Result};
use crate::request::PaymentRequest;

/// Cookie holding the session's anti-forgery token
const CSRF_COOKIE: &str = "csrftoken";

/// Header the backend expects the token on
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for the payment backend
pub struct HttpPaymentsApi {
    http: Client,
    base_url: Url,
    cookies: Arc<Jar>,
}

impl HttpPaymentsApi {
    /// Create a client rooted at the backend base URL
    pub fn new(mut base_url: Url) -> Result<Self> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let cookies = Arc::new(Jar::default());
        let http = Client::builder().cookie_provider(cookies.clone()).build()?;
        Ok(Self {
            http,
            base_url,
            cookies,
        })
    }

    /// Create from the `PAYMENTS_BASE_URL` environment variable
    pub fn from_env() -> Result<Self> {
        let base = std::env::var("PAYMENTS_BASE_URL")
            .map_err(|_| PaymentError::Config("PAYMENTS_BASE_URL not set".into()))?;
        let url = base
            .parse::<Url>()
            .map_err(|e| PaymentError::Config(format!("invalid PAYMENTS_BASE_URL: {e}")))?;
        Self::new(url)
    }

    /// Seed the session cookie store, e.g. with the csrftoken cookie
    /// obtained when the page was served
    pub fn add_cookie(&self, cookie: &str) {
        self.cookies.add_cookie_str(cookie, &self.base_url);
    }

    /// Anti-forgery token from the cookie store, if the session has one
    fn csrf_token(&self) -> Option<String> {
        let header = self.cookies.cookies(&self.base_url)?;
        let raw = header.to_str().ok()?;
        raw.split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == CSRF_COOKIE)
            .map(|(_, value)| value.to_string())
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| PaymentError::Config(e.to_string()))
    }
}

#[async_trait]
impl PaymentsApi for HttpPaymentsApi {
    async fn create_payment(&self, request: &PaymentRequest) -> Result<PaymentCreated> {
        let url = self.endpoint("payments/")?;
        let mut call = self.http.post(url).json(request);
        if let Some(token) = self.csrf_token() {
            call = call.header(CSRF_HEADER, token);
        }

        let response = call.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }
        let body = response.text().await.unwrap_or_default();
        Err(failure(status, body))
    }

    async fn delete_payment(&self, uuid: &Uuid) -> Result<()> {
        let url = self.endpoint(&format!("payments/{uuid}/"))?;
        let mut call = self.http.delete(url);
        if let Some(token) = self.csrf_token() {
            call = call.header(CSRF_HEADER, token);
        }

        let response = call.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(failure(status, body))
    }

    fn name(&self) -> &str {
        "PaymentsHttp"
    }
}

/// Map a non-2xx response to an error.
///
/// 403 is the anti-abuse rejection: an expected outcome, kept out of error
/// telemetry but still surfaced as a failure. Anything else logs the
/// response body for observability.
fn failure(status: StatusCode, body: String) -> PaymentError {
    if status == StatusCode::FORBIDDEN {
        tracing::debug!(status = status.as_u16(), "payment request rejected");
        return PaymentError::Rejected;
    }
    tracing::error!(status = status.as_u16(), body = %body, "payment API error");
    PaymentError::Api {
        status: status.as_u16(),
        body,
    }
}
