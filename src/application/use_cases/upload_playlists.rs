//! # Upload Playlists Use Case
//!
//! プレイリストアップロードユースケース
//!
//! One failed playlist never stops the rest of the batch.

use log::{debug, error, info};
use std::sync::Arc;

use crate::domain::entities::playlist::PlaylistFile;
use crate::domain::entities::session::{AuthenticatedSession, Credentials};
use crate::domain::entities::upload_outcome::RunSummary;
use crate::domain::errors::Result;
use crate::domain::repositories::session_client::SessionClient;

/// プレイリストアップロードユースケース
pub struct UploadPlaylistsUseCase<C: SessionClient> {
    session_client: Arc<C>,
}

impl<C: SessionClient> UploadPlaylistsUseCase<C> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `session_client` - セッションクライアント
    pub fn new(session_client: Arc<C>) -> Self {
        Self { session_client }
    }

    /// 一度だけログインする
    ///
    /// # Errors
    ///
    /// ログインに失敗した場合は致命的エラーを返す
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<AuthenticatedSession> {
        let session = self.session_client.login(credentials).await?;
        debug!(
            "Authenticated as {} (csrf token: {})",
            credentials.username,
            if session.csrf_token().is_some() { "yes" } else { "no" }
        );
        Ok(session)
    }

    /// 全プレイリストを順番にアップロードする
    ///
    /// # Arguments
    ///
    /// * `session` - 認証済みセッション
    /// * `playlists` - アップロードするプレイリスト
    ///
    /// # Returns
    ///
    /// ファイルごとの結果を集計したサマリー
    pub async fn execute(
        &self,
        session: &AuthenticatedSession,
        playlists: &[PlaylistFile],
    ) -> RunSummary {
        let mut summary = RunSummary::new();

        for playlist in playlists {
            let outcome = self.session_client.submit(session, playlist).await;

            match outcome.error() {
                None => info!(
                    "✅ {} uploaded successfully ({} songs)",
                    outcome.title(),
                    outcome.song_count()
                ),
                Some(detail) => {
                    error!("❌ Failed to add {}: {}", outcome.title(), detail);
                    debug!("{:?}", outcome);
                }
            }

            summary.record(outcome);
        }

        summary
    }
}
