//! mStream REST API payloads

use serde::{Deserialize, Serialize};

/// `POST /api/v1/auth/login` request body
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /api/v1/auth/login` response body
///
/// Only the token is consumed; everything else the server returns is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

impl LoginResponse {
    /// Non-empty anti-forgery token, if the server issued one
    pub fn csrf_token(self) -> Option<String> {
        self.token.filter(|t| !t.is_empty())
    }
}

/// `POST /api/v1/playlist/save` request body
#[derive(Debug, Serialize)]
pub struct SavePlaylistRequest<'a> {
    pub title: &'a str,
    pub songs: &'a [String],
}
