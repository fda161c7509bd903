//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **DiscoverPlaylistsUseCase**: プレイリストファイルの発見
//! - **UploadPlaylistsUseCase**: ログインとプレイリストのアップロード

pub mod discover_playlists;
pub mod upload_playlists;
