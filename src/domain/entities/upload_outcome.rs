//! # Upload Outcome
//!
//! ファイル単位のアップロード結果と、実行全体のサマリー

use std::path::{Path, PathBuf};

/// 1ファイルのアップロード結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    path: PathBuf,
    title: String,
    song_count: usize,
    error: Option<String>,
}

impl UploadOutcome {
    /// 成功した結果を作成
    pub fn success(path: impl Into<PathBuf>, title: impl Into<String>, song_count: usize) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            song_count,
            error: None,
        }
    }

    /// 失敗した結果を作成
    pub fn failure(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        song_count: usize,
        error: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            song_count,
            error: Some(error.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn song_count(&self) -> usize {
        self.song_count
    }

    /// 失敗時のエラー詳細
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 実行全体のサマリー
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    outcomes: Vec<UploadOutcome>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 結果を追加
    pub fn record(&mut self, outcome: UploadOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[UploadOutcome] {
        &self.outcomes
    }

    /// 成功したファイル数
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// 失敗したファイル数
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// 処理したファイル数
    #[inline]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}
