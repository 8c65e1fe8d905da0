use thiserror::Error;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Username cannot be empty.")]
    EmptyUsername,

    #[error("Password cannot be empty.")]
    EmptyPassword,
}

//
// ─── PRIVILEGE MODE ────────────────────────────────────────────────────────────
//

/// Privilege mode derived from the username prefix at login time.
///
/// `%user` selects `Admin`, `!user` selects `DecoyAdmin`, a bare username
/// selects `Normal`. The marker is stripped before the username is used as
/// a login credential.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrivilegeMode {
    #[default]
    Normal,
    /// True, unmodified answers.
    Admin,
    /// Always-inverted answers; a trap for shared credentials.
    DecoyAdmin,
}

impl PrivilegeMode {
    const ADMIN_MARKER: char = '%';
    const DECOY_MARKER: char = '!';

    /// Splits a raw username into its privilege mode and the bare username.
    #[must_use]
    pub fn split_marker(raw: &str) -> (Self, &str) {
        if let Some(rest) = raw.strip_prefix(Self::ADMIN_MARKER) {
            (Self::Admin, rest)
        } else if let Some(rest) = raw.strip_prefix(Self::DECOY_MARKER) {
            (Self::DecoyAdmin, rest)
        } else {
            (Self::Normal, raw)
        }
    }
}

//
// ─── CREDENTIALS ───────────────────────────────────────────────────────────────
//

/// Login credentials, validated non-empty at construction.
///
/// Immutable for the lifetime of a session; never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Build credentials from already-stripped username and password.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` if either field is empty or blank.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let username = username.into();
        let password = password.into();

        if username.trim().is_empty() {
            return Err(CredentialsError::EmptyUsername);
        }
        if password.trim().is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    /// Parse the username as entered on the login surface: the privilege
    /// marker is detected, stripped, and returned alongside the credentials.
    ///
    /// # Errors
    ///
    /// Returns `CredentialsError` if the stripped username or the password
    /// is empty.
    pub fn parse(
        raw_username: &str,
        password: impl Into<String>,
    ) -> Result<(Self, PrivilegeMode), CredentialsError> {
        let (mode, username) = PrivilegeMode::split_marker(raw_username);
        Ok((Self::new(username, password)?, mode))
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Keep passwords out of debug output.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_username_is_normal_mode() {
        let (creds, mode) = Credentials::parse("student", "hunter2").unwrap();
        assert_eq!(mode, PrivilegeMode::Normal);
        assert_eq!(creds.username(), "student");
    }

    #[test]
    fn percent_marker_selects_admin_and_is_stripped() {
        let (creds, mode) = Credentials::parse("%student", "hunter2").unwrap();
        assert_eq!(mode, PrivilegeMode::Admin);
        assert_eq!(creds.username(), "student");
    }

    #[test]
    fn bang_marker_selects_decoy_admin_and_is_stripped() {
        let (creds, mode) = Credentials::parse("!student", "hunter2").unwrap();
        assert_eq!(mode, PrivilegeMode::DecoyAdmin);
        assert_eq!(creds.username(), "student");
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            Credentials::new("", "pw").unwrap_err(),
            CredentialsError::EmptyUsername
        );
        assert_eq!(
            Credentials::new("user", "  ").unwrap_err(),
            CredentialsError::EmptyPassword
        );
        // A marker with nothing behind it is an empty username.
        assert_eq!(
            Credentials::parse("%", "pw").unwrap_err(),
            CredentialsError::EmptyUsername
        );
    }

    #[test]
    fn debug_output_redacts_password() {
        let creds = Credentials::new("user", "secret").unwrap();
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("secret"));
    }
}
