//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **PlaylistFile / Playlist**: プレイリストファイルの参照とその内容
//! - **Credentials / AuthenticatedSession**: ログイン情報と認証済みセッション
//! - **UploadOutcome / RunSummary**: ファイル単位の結果と実行全体の集計

pub mod playlist;
pub mod session;
pub mod upload_outcome;
