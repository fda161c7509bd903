//! File Playlist Repository Implementation
//!
//! PlaylistRepositoryのファイルシステム実装

use async_trait::async_trait;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::playlist::{has_playlist_extension, PlaylistFile};
use crate::domain::errors::{PlaylistError, Result};
use crate::domain::repositories::playlist_repository::PlaylistRepository;

/// Expands a leading tilde in `path`
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// ファイルシステムベースのプレイリストリポジトリ
pub struct FilePlaylistRepository;

impl FilePlaylistRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// プレイリストを発見する（内部実装）
    fn discover_internal(root: &Path) -> Result<Vec<PlaylistFile>> {
        let root = expand_path(root);

        if !root.exists() {
            return Err(PlaylistError::NotFound(root));
        }

        if root.is_file() {
            if !has_playlist_extension(&root) {
                return Err(PlaylistError::invalid_input(root, "not a .m3u playlist"));
            }
            return Ok(vec![PlaylistFile::new(root)]);
        }

        if !root.is_dir() {
            return Err(PlaylistError::invalid_input(
                root,
                "neither a file nor a directory",
            ));
        }

        let mut playlists = Vec::new();

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable children (e.g. dangling symlinks) are skipped; only the root is fatal
                Err(e) if e.depth() > 0 => {
                    warn!("Skipping unreadable entry in {}: {}", root.display(), e);
                    continue;
                }
                Err(e) => {
                    return Err(PlaylistError::Io(std::io::Error::other(format!(
                        "Failed to list {}: {}",
                        root.display(),
                        e
                    ))));
                }
            };

            let path = entry.path();
            if entry.file_type().is_file() && has_playlist_extension(path) {
                playlists.push(PlaylistFile::new(path));
            } else {
                debug!("Skipping {}", path.display());
            }
        }

        debug!(
            "Found {} playlist file(s) in {}",
            playlists.len(),
            root.display()
        );

        Ok(playlists)
    }
}

#[async_trait]
impl PlaylistRepository for FilePlaylistRepository {
    async fn discover(&self, root: &Path) -> Result<Vec<PlaylistFile>> {
        let root = root.to_path_buf();
        tokio::task::spawn_blocking(move || Self::discover_internal(&root))
            .await
            .map_err(|e| {
                PlaylistError::Io(std::io::Error::other(format!(
                    "Failed to spawn blocking task: {}",
                    e
                )))
            })?
    }
}

impl Default for FilePlaylistRepository {
    fn default() -> Self {
        Self::new()
    }
}
