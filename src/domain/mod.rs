//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやファイルシステムの詳細を知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（PlaylistFile, AuthenticatedSessionなど）
//! - **errors**: 実行を中断する致命的エラーの分類
//! - **repositories**: Repository trait（インターフェース定義のみ）

pub mod entities;
pub mod errors;
pub mod repositories;
