//! # Session Entities
//!
//! 認証情報と認証済みセッション

/// ログインに使用する認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// 認証済みセッション
///
/// A successful login is the only producer in production code. The value is
/// read-only afterwards and passed by reference into every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    base_url: String,
    csrf_token: Option<String>,
}

impl AuthenticatedSession {
    pub fn new(base_url: impl Into<String>, csrf_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            csrf_token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// ログイン時に発行されたアンチフォージェリトークン
    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_session_token_accessor() {
        let session = AuthenticatedSession::new("http://127.0.0.1:3000", Some("abc".into()));
        assert_eq!(session.csrf_token(), Some("abc"));
        assert_eq!(session.base_url(), "http://127.0.0.1:3000");

        let anonymous = AuthenticatedSession::new("http://127.0.0.1:3000", None);
        assert_eq!(anonymous.csrf_token(), None);
    }
}
