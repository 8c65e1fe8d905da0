use std::fmt;

use algebruh_core::model::{AttachmentCode, Credentials, ImageSource, PrivilegeMode};

use crate::browser::{ScriptedBrowser, WebClient};
use crate::error::{FetchError, LoginError};
use crate::site::SiteConfig;

/// Client session against the quiz site.
///
/// Created unauthenticated; `login` drives the scripted login flow and
/// flips the `authenticated`/`authorized` pair. Every fetch consults
/// `is_logged_in` before touching the network. One session per process;
/// nothing survives exit.
pub struct Session {
    credentials: Credentials,
    privilege: PrivilegeMode,
    client: Box<dyn WebClient>,
    site: SiteConfig,
    authenticated: bool,
    authorized: bool,
}

impl Session {
    /// Build a session over an explicit web client. Tests inject a
    /// scripted fake here.
    #[must_use]
    pub fn new(
        credentials: Credentials,
        privilege: PrivilegeMode,
        client: impl WebClient + 'static,
        site: SiteConfig,
    ) -> Self {
        Self {
            credentials,
            privilege,
            client: Box::new(client),
            site,
            authenticated: false,
            authorized: false,
        }
    }

    /// Build a session over a fresh reqwest-backed browser against the
    /// default site.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Web` if the browser client cannot be built.
    pub fn connect(
        credentials: Credentials,
        privilege: PrivilegeMode,
    ) -> Result<Self, LoginError> {
        Ok(Self::new(
            credentials,
            privilege,
            ScriptedBrowser::new()?,
            SiteConfig::default(),
        ))
    }

    #[must_use]
    pub fn privilege(&self) -> PrivilegeMode {
        self.privilege
    }

    /// True only when the login both authenticated the credentials and the
    /// course access page answered 200.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.authenticated && self.authorized
    }

    /// Drive the login flow: open the login page, submit the first form
    /// with the stored credentials, then open the course access page.
    ///
    /// The site answers a successful submit with a redirect that a naive
    /// client reports as an error; that redirect status is the success
    /// signal here. Any non-redirect status means the credentials were
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns `LoginError::Rejected` when the submit does not redirect,
    /// `LoginError::AccessDenied` when authenticated but the access page
    /// does not answer 200, and `LoginError::Web` on transport failure.
    pub async fn login(&mut self) -> Result<(), LoginError> {
        self.authenticated = false;
        self.authorized = false;

        self.client.open(&self.site.login_url()).await?;

        let fields = [
            ("login", self.credentials.username()),
            ("password", self.credentials.password()),
        ];
        let submit = self
            .client
            .submit_form(&self.site.login_url(), &fields)
            .await?;

        if !submit.is_redirect() {
            return Err(LoginError::Rejected(submit.status));
        }
        self.authenticated = true;

        let access = self.client.open(&self.site.access_url()).await?;
        if access.status != 200 {
            return Err(LoginError::AccessDenied(access.status));
        }
        self.authorized = true;

        Ok(())
    }

    /// Fetch an attachment identified by three positional codes.
    ///
    /// `Ok(None)` means the site had no attachment there, a common and
    /// unremarkable outcome.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Code` for malformed codes (checked before any
    /// network traffic), `FetchError::NotLoggedIn` when the session gate
    /// fails, and `FetchError::Web` on transport failure.
    pub async fn get_attachment(
        &self,
        x: impl fmt::Display,
        y: impl fmt::Display,
        z: impl fmt::Display,
    ) -> Result<Option<Vec<u8>>, FetchError> {
        let x = AttachmentCode::new(x)?;
        let y = AttachmentCode::new(y)?;
        let z = AttachmentCode::new(z)?;

        if !self.is_logged_in() {
            return Err(FetchError::NotLoggedIn);
        }

        let response = self
            .client
            .open(&self.site.attachment_url(&x, &y, &z))
            .await?;
        if !response.is_success() {
            return Ok(None);
        }
        Ok(Some(response.body))
    }

    /// Fetch a dropped image by URL through the authenticated browser.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Source` for URLs the drop surface should not
    /// have produced, `FetchError::NotLoggedIn` when the session gate
    /// fails, and `FetchError::Web` on transport failure.
    pub async fn fetch_url(&self, raw: &str) -> Result<Option<Vec<u8>>, FetchError> {
        let source = ImageSource::parse(raw)?;

        if !self.is_logged_in() {
            return Err(FetchError::NotLoggedIn);
        }

        let response = self.client.open(source.as_str()).await?;
        if !response.is_success() {
            return Ok(None);
        }
        Ok(Some(response.body))
    }
}
