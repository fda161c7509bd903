//! # Playlist Repository Trait
//!
//! プレイリストファイルの発見を抽象化

use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::playlist::PlaylistFile;
use crate::domain::errors::Result;

/// プレイリストリポジトリ
///
/// ファイルまたはディレクトリからプレイリストファイルを発見する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// プレイリストファイルを発見する
    ///
    /// # Arguments
    ///
    /// * `root` - プレイリストファイル、またはそれを含むディレクトリ
    ///
    /// # Returns
    ///
    /// 発見されたプレイリストの参照（ディレクトリの場合は直下のみ）
    ///
    /// # Errors
    ///
    /// - パスが存在しない場合は `PlaylistError::NotFound`
    /// - プレイリストではないファイルの場合は `PlaylistError::InvalidInput`
    async fn discover(&self, root: &Path) -> Result<Vec<PlaylistFile>>;
}
