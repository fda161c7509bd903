//! Adapter Layer
//!
//! 外部システム（mStreamサーバー, ファイルシステム, 環境変数）との統合

pub mod config;
pub mod mstream;
pub mod repositories;
