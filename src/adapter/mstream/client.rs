//! mStream Session Client
//!
//! SessionClientのmStream REST API実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use std::time::Duration;

use super::models::{LoginRequest, LoginResponse, SavePlaylistRequest};
use crate::domain::entities::playlist::{Playlist, PlaylistFile};
use crate::domain::entities::session::{AuthenticatedSession, Credentials};
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::errors::{PlaylistError, Result as PlaylistResult};
use crate::domain::repositories::session_client::SessionClient;

pub const LOGIN_ENDPOINT: &str = "/api/v1/auth/login";
pub const SAVE_PLAYLIST_ENDPOINT: &str = "/api/v1/playlist/save";
pub const CSRF_HEADER: &str = "X-CSRF-Token";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Join `base_url` and `endpoint` with exactly one slash
pub fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    let mut messages = Vec::new();
    for cause in e.chain() {
        messages.push(cause.to_string());
    }
    messages.join(": ")
}

/// Fail with the status line and body when the response is not 2xx
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    anyhow::bail!("HTTP {}: {}", status, body.trim())
}

/// mStreamサーバーのHTTPクライアント
///
/// The underlying `reqwest::Client` keeps any session cookie the server
/// sets at login; the anti-forgery token lives in [`AuthenticatedSession`].
pub struct MstreamClient {
    http: Client,
    base_url: String,
}

impl MstreamClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn try_login(&self, credentials: &Credentials) -> Result<AuthenticatedSession> {
        let url = endpoint_url(&self.base_url, LOGIN_ENDPOINT);
        let payload = LoginRequest {
            username: &credentials.username,
            password: &credentials.password,
        };

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("POST {}", url))?;
        let response = ensure_success(response)
            .await
            .with_context(|| format!("POST {}", url))?;

        let body: LoginResponse = response
            .json()
            .await
            .context("Parsing login response json")?;

        let csrf_token = body.csrf_token();
        if csrf_token.is_none() {
            info!(
                "ℹ️ Login succeeded but no CSRF token was returned. Continuing without the {} header.",
                CSRF_HEADER
            );
        }

        Ok(AuthenticatedSession::new(self.base_url.clone(), csrf_token))
    }

    async fn try_save(&self, session: &AuthenticatedSession, playlist: &Playlist) -> Result<()> {
        let url = endpoint_url(session.base_url(), SAVE_PLAYLIST_ENDPOINT);
        let payload = SavePlaylistRequest {
            title: &playlist.title,
            songs: &playlist.songs,
        };

        let mut request = self.http.post(&url).json(&payload);
        if let Some(token) = session.csrf_token() {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("POST {}", url))?;
        ensure_success(response)
            .await
            .with_context(|| format!("POST {}", url))?;

        Ok(())
    }
}

#[async_trait]
impl SessionClient for MstreamClient {
    async fn login(&self, credentials: &Credentials) -> PlaylistResult<AuthenticatedSession> {
        self.try_login(credentials)
            .await
            .map_err(|e| PlaylistError::Authentication(error_chain_to_string(&e)))
    }

    async fn submit(&self, session: &AuthenticatedSession, file: &PlaylistFile) -> UploadOutcome {
        let title = file.title();

        let content = match tokio::fs::read(file.path())
            .await
            .with_context(|| format!("Failed to read {}", file.path().display()))
        {
            Ok(content) => content,
            Err(e) => return UploadOutcome::failure(file.path(), title, 0, error_chain_to_string(&e)),
        };

        let playlist = Playlist::parse(title, &content);
        info!(
            "▶️ Uploading playlist {} ({} songs)…",
            playlist.title,
            playlist.len()
        );

        match self.try_save(session, &playlist).await {
            Ok(()) => UploadOutcome::success(file.path(), playlist.title, playlist.songs.len()),
            Err(e) => {
                debug!("Upload of {} failed: {:?}", file.path().display(), e);
                UploadOutcome::failure(
                    file.path(),
                    playlist.title,
                    playlist.songs.len(),
                    error_chain_to_string(&e),
                )
            }
        }
    }
}
