//! # Playlist Entities
//!
//! プレイリストファイルの参照と、その内容のバリューオブジェクト

use std::path::{Path, PathBuf};

/// 対象とするプレイリストの拡張子（大文字小文字は区別しない）
pub const PLAYLIST_EXTENSION: &str = "m3u";

/// Returns true if `path` carries the playlist extension.
pub fn has_playlist_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(PLAYLIST_EXTENSION))
        .unwrap_or(false)
}

/// プレイリストファイルへの参照
///
/// File Discovery が生成し、Session Client が一度だけ消費する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistFile {
    path: PathBuf,
}

impl PlaylistFile {
    /// 新しい参照を作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// ファイルパスへの参照を返す
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Playlist title sent to the server: the file stem.
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// パース済みのプレイリスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub title: String,
    pub songs: Vec<String>,
}

impl Playlist {
    /// `.m3u` の内容をパースする
    ///
    /// 空行と `#` で始まる行（`#EXTM3U`, `#EXTINF` 等）は無視する。
    /// UTF-8 として不正なバイトは置換文字に変換される。
    ///
    /// # 例
    ///
    /// ```
    /// use m3usync::domain::entities::playlist::Playlist;
    ///
    /// let content = b"#EXTM3U\n#EXTINF:123,Artist - Track\nmusic/track.mp3\n\n";
    /// let playlist = Playlist::parse("road-trip", content);
    ///
    /// assert_eq!(playlist.title, "road-trip");
    /// assert_eq!(playlist.songs, vec!["music/track.mp3".to_string()]);
    /// ```
    pub fn parse(title: impl Into<String>, content: &[u8]) -> Self {
        let text = String::from_utf8_lossy(content);
        let songs = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        Self {
            title: title.into(),
            songs,
        }
    }

    /// 曲数を返す
    #[inline]
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// 曲が含まれていないかどうか
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_playlist_extension() {
        assert!(has_playlist_extension(Path::new("/music/mix.m3u")));
        assert!(has_playlist_extension(Path::new("MIX.M3U")));
        assert!(!has_playlist_extension(Path::new("mix.m3u8")));
        assert!(!has_playlist_extension(Path::new("notes.txt")));
        assert!(!has_playlist_extension(Path::new("m3u")));
    }

    #[test]
    fn test_playlist_file_title_is_stem() {
        let file = PlaylistFile::new("/music/playlists/Friday Night.m3u");
        assert_eq!(file.title(), "Friday Night");
        assert_eq!(file.path(), Path::new("/music/playlists/Friday Night.m3u"));
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let content = b"#EXTM3U\n\n#EXTINF:200,A - B\n  a/b.mp3  \r\n#comment\nc/d.flac\n";
        let playlist = Playlist::parse("mix", content);

        assert_eq!(playlist.songs, vec!["a/b.mp3", "c/d.flac"]);
        assert_eq!(playlist.len(), 2);
        assert!(!playlist.is_empty());
    }

    #[test]
    fn test_parse_empty_file() {
        let playlist = Playlist::parse("empty", b"");
        assert!(playlist.is_empty());
    }

    #[test]
    fn test_parse_invalid_utf8_is_lossy() {
        let content = b"caf\xe9.mp3\nok.mp3\n";
        let playlist = Playlist::parse("lossy", content);

        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.songs[1], "ok.mp3");
        assert!(playlist.songs[0].starts_with("caf"));
    }
}
