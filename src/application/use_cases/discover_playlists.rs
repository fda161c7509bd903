//! # Discover Playlists Use Case
//!
//! プレイリストファイル発見ユースケース

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::playlist::PlaylistFile;
use crate::domain::errors::Result;
use crate::domain::repositories::playlist_repository::PlaylistRepository;

/// プレイリストファイル発見ユースケース
///
/// 指定されたファイルまたはディレクトリからプレイリストを発見する
pub struct DiscoverPlaylistsUseCase<R: PlaylistRepository> {
    playlist_repository: Arc<R>,
}

impl<R: PlaylistRepository> DiscoverPlaylistsUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `playlist_repository` - プレイリストリポジトリ
    pub fn new(playlist_repository: Arc<R>) -> Self {
        Self {
            playlist_repository,
        }
    }

    /// プレイリストファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `root` - プレイリストファイル、またはディレクトリのパス
    ///
    /// # Returns
    ///
    /// 発見されたプレイリストの参照のリスト（空の場合もエラーではない）
    ///
    /// # Errors
    ///
    /// パスが存在しない、またはプレイリストではない場合にエラーを返す
    pub async fn execute(&self, root: &Path) -> Result<Vec<PlaylistFile>> {
        self.playlist_repository.discover(root).await
    }
}
