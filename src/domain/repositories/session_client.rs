//! # Session Client Trait
//!
//! リモートのメディアサーバーへのログインとアップロードを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::playlist::PlaylistFile;
use crate::domain::entities::session::{AuthenticatedSession, Credentials};
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::errors::Result;

/// セッションクライアント
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// ログインして認証済みセッションを返す
    ///
    /// # Errors
    ///
    /// 非2xxレスポンスまたは通信失敗の場合に `PlaylistError::Authentication` を返す。
    /// この失敗は実行全体にとって致命的。
    async fn login(&self, credentials: &Credentials) -> Result<AuthenticatedSession>;

    /// プレイリストを1件アップロードする
    ///
    /// Never fails: read errors, rejected uploads and transport errors are
    /// all reported through the returned [`UploadOutcome`].
    async fn submit(&self, session: &AuthenticatedSession, playlist: &PlaylistFile)
        -> UploadOutcome;
}
