use algebruh_core::model::AttachmentCode;

const BASE_URL: &str = "https://torricelli.uvigo.es/aula/claroline";
const COURSE_ID: &str = "O06G151V0116";

const LOGIN_EXT: &str = "auth/login.php";
const ACCESS_EXT: &str = "aula/claroline/course/index.php";
const ATTACHMENT_EXT: &str = "exercise/get_attachment.php";

/// Remote site endpoints for one course.
///
/// Explicit instances are passed to the session; nothing here is a
/// process-wide singleton, so tests can point at a local double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    base_url: String,
    course_id: String,
}

impl SiteConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>, course_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            course_id: course_id.into(),
        }
    }

    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}/{LOGIN_EXT}", self.base_url)
    }

    #[must_use]
    pub fn access_url(&self) -> String {
        format!("{}/{ACCESS_EXT}?cid={}", self.base_url, self.course_id)
    }

    #[must_use]
    pub fn attachment_url(
        &self,
        x: &AttachmentCode,
        y: &AttachmentCode,
        z: &AttachmentCode,
    ) -> String {
        format!(
            "{}/{ATTACHMENT_EXT}?id=download_{x}_{y}_{z}",
            self.base_url
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::new(BASE_URL, COURSE_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_compose_from_base_and_course() {
        let site = SiteConfig::new("https://example.test/aula/", "C1");
        assert_eq!(site.login_url(), "https://example.test/aula/auth/login.php");
        assert_eq!(
            site.access_url(),
            "https://example.test/aula/aula/claroline/course/index.php?cid=C1"
        );
    }

    #[test]
    fn attachment_url_uses_the_download_template() {
        let site = SiteConfig::new("https://example.test", "C1");
        let code = |raw: u16| AttachmentCode::new(raw).unwrap();
        assert_eq!(
            site.attachment_url(&code(1), &code(22), &code(333)),
            "https://example.test/exercise/get_attachment.php?id=download_1_22_333"
        );
    }
}
