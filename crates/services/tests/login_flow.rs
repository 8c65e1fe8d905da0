use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use algebruh_core::model::{CodeError, Credentials, PrivilegeMode};
use services::{FetchError, LoginError, Session, SiteConfig, WebClient, WebError, WebResponse};

/// Scripted stand-in for the remote site.
///
/// Records every URL it is asked for, so tests can assert that gated
/// operations never reach the network.
#[derive(Clone)]
struct FakeSite {
    submit_status: u16,
    access_status: u16,
    fail_submit: bool,
    attachments: HashMap<String, Vec<u8>>,
    opened: Arc<Mutex<Vec<String>>>,
    submitted_fields: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeSite {
    fn new(submit_status: u16, access_status: u16) -> Self {
        Self {
            submit_status,
            access_status,
            fail_submit: false,
            attachments: HashMap::new(),
            opened: Arc::new(Mutex::new(Vec::new())),
            submitted_fields: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn with_attachment(mut self, url: &str, body: &[u8]) -> Self {
        self.attachments.insert(url.to_string(), body.to_vec());
        self
    }

    fn failing_submit(mut self) -> Self {
        self.fail_submit = true;
        self
    }

    fn opened_urls(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    fn submitted(&self) -> Vec<(String, String)> {
        self.submitted_fields.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebClient for FakeSite {
    async fn open(&self, url: &str) -> Result<WebResponse, WebError> {
        self.opened.lock().unwrap().push(url.to_string());

        if url.contains("course/index.php") {
            return Ok(WebResponse {
                status: self.access_status,
                body: Vec::new(),
            });
        }
        if let Some(body) = self.attachments.get(url) {
            return Ok(WebResponse {
                status: 200,
                body: body.clone(),
            });
        }
        if url.contains("login.php") {
            return Ok(WebResponse {
                status: 200,
                body: Vec::new(),
            });
        }
        Ok(WebResponse {
            status: 404,
            body: Vec::new(),
        })
    }

    async fn submit_form(
        &self,
        _url: &str,
        fields: &[(&str, &str)],
    ) -> Result<WebResponse, WebError> {
        if self.fail_submit {
            return Err(WebError::Connection("connection reset".into()));
        }
        let mut recorded = self.submitted_fields.lock().unwrap();
        for (name, value) in fields {
            recorded.push(((*name).to_string(), (*value).to_string()));
        }
        Ok(WebResponse {
            status: self.submit_status,
            body: Vec::new(),
        })
    }
}

fn test_site() -> SiteConfig {
    SiteConfig::new("https://site.test", "C1")
}

fn session_with(site: &FakeSite) -> Session {
    let (credentials, mode) = Credentials::parse("%student", "hunter2").unwrap();
    Session::new(credentials, mode, site.clone(), test_site())
}

#[tokio::test]
async fn redirect_on_submit_then_access_ok_logs_in() {
    let site = FakeSite::new(301, 200);
    let mut session = session_with(&site);

    assert!(!session.is_logged_in());
    session.login().await.unwrap();
    assert!(session.is_logged_in());
    assert_eq!(session.privilege(), PrivilegeMode::Admin);

    // The form carried the stripped username and the password.
    let fields = site.submitted();
    assert!(fields.contains(&("login".to_string(), "student".to_string())));
    assert!(fields.contains(&("password".to_string(), "hunter2".to_string())));
}

#[tokio::test]
async fn non_redirect_submit_is_rejected() {
    let site = FakeSite::new(200, 200);
    let mut session = session_with(&site);

    let err = session.login().await.unwrap_err();
    assert!(matches!(err, LoginError::Rejected(200)));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn transport_failure_on_submit_is_a_login_failure() {
    let site = FakeSite::new(301, 200).failing_submit();
    let mut session = session_with(&site);

    let err = session.login().await.unwrap_err();
    assert!(matches!(err, LoginError::Web(_)));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn authenticated_without_course_access_is_not_logged_in() {
    let site = FakeSite::new(302, 403);
    let mut session = session_with(&site);

    let err = session.login().await.unwrap_err();
    assert!(matches!(err, LoginError::AccessDenied(403)));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn fetch_while_logged_out_never_touches_the_network() {
    let site = FakeSite::new(301, 200);
    let session = session_with(&site);

    let err = session.get_attachment(1, 2, 3).await.unwrap_err();
    assert!(matches!(err, FetchError::NotLoggedIn));
    assert!(site.opened_urls().is_empty());

    let err = session.fetch_url("https://site.test/q.png").await.unwrap_err();
    assert!(matches!(err, FetchError::NotLoggedIn));
    assert!(site.opened_urls().is_empty());
}

#[tokio::test]
async fn malformed_codes_fail_validation_before_anything_else() {
    let site = FakeSite::new(301, 200);
    let session = session_with(&site);

    let err = session.get_attachment("1a", 2, 3).await.unwrap_err();
    assert!(matches!(
        err,
        FetchError::Code(CodeError::NotNumeric(_))
    ));

    let err = session.get_attachment(1, 2, 1000).await.unwrap_err();
    assert!(matches!(err, FetchError::Code(CodeError::Length(4))));

    assert!(site.opened_urls().is_empty());
}

#[tokio::test]
async fn missing_attachment_is_a_normal_outcome() {
    let site = FakeSite::new(301, 200);
    let mut session = session_with(&site);
    session.login().await.unwrap();

    let fetched = session.get_attachment(9, 9, 9).await.unwrap();
    assert_eq!(fetched, None);
}

#[tokio::test]
async fn present_attachment_returns_its_bytes() {
    let url = "https://site.test/exercise/get_attachment.php?id=download_1_2_3";
    let site = FakeSite::new(301, 200).with_attachment(url, b"png-bytes");
    let mut session = session_with(&site);
    session.login().await.unwrap();

    let fetched = session.get_attachment(1, 2, 3).await.unwrap();
    assert_eq!(fetched.as_deref(), Some(b"png-bytes".as_slice()));
}

#[tokio::test]
async fn dropped_urls_are_validated_then_fetched() {
    let url = "https://site.test/quiz/question.png";
    let site = FakeSite::new(301, 200).with_attachment(url, b"dropped");
    let mut session = session_with(&site);
    session.login().await.unwrap();

    let err = session.fetch_url("ftp://site.test/q.jpg").await.unwrap_err();
    assert!(matches!(err, FetchError::Source(_)));

    let fetched = session.fetch_url(url).await.unwrap();
    assert_eq!(fetched.as_deref(), Some(b"dropped".as_slice()));
}
