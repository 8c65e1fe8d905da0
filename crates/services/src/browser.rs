use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::redirect::Policy;
use reqwest::Client;

use crate::error::WebError;

/// The site answers browser user agents differently; keep the header the
/// scripted flow was recorded with.
const USER_AGENT: &str = "Chrome";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;

/// Raw outcome of one navigation or form submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl WebResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_redirect(&self) -> bool {
        (300..400).contains(&self.status)
    }
}

/// Seam between the session state machine and the HTTP stack.
///
/// Any conforming client with cookie retention works here; tests drive the
/// session with a scripted fake instead of a live site.
#[async_trait]
pub trait WebClient: Send + Sync {
    /// Navigate to a URL, following redirects.
    ///
    /// # Errors
    ///
    /// Returns `WebError` on transport-level failure. Error statuses are
    /// returned as responses, not errors.
    async fn open(&self, url: &str) -> Result<WebResponse, WebError>;

    /// Submit a form without following the response redirect: the raw
    /// status is the signal the login flow inspects.
    ///
    /// # Errors
    ///
    /// Returns `WebError` on transport-level failure.
    async fn submit_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<WebResponse, WebError>;
}

/// Scripted browser backed by reqwest.
///
/// One cookie jar is shared between a redirect-following navigation client
/// and a no-redirect form client, so the session cookie set during login
/// travels with every later request. Robots exclusion does not apply: this
/// drives a site the user holds credentials for.
#[derive(Debug, Clone)]
pub struct ScriptedBrowser {
    nav: Client,
    form: Client,
}

impl ScriptedBrowser {
    /// # Errors
    ///
    /// Returns `WebError` if the underlying clients cannot be built.
    pub fn new() -> Result<Self, WebError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Build a browser with a bounded per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns `WebError` if the underlying clients cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self, WebError> {
        let jar = Arc::new(Jar::default());

        let nav = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(Arc::clone(&jar))
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(timeout)
            .build()?;

        let form = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_provider(jar)
            .redirect(Policy::none())
            .timeout(timeout)
            .build()?;

        Ok(Self { nav, form })
    }
}

#[async_trait]
impl WebClient for ScriptedBrowser {
    async fn open(&self, url: &str) -> Result<WebResponse, WebError> {
        let response = self.nav.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(WebResponse { status, body })
    }

    async fn submit_form(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> Result<WebResponse, WebError> {
        let response = self.form.post(url).form(fields).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(WebResponse { status, body })
    }
}
