//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// データセットに存在しない名前を引いた
    #[error("idol not found: {0}")]
    EntryNotFound(String),

    /// データセット取得の失敗（ネットワーク・HTTPステータス）
    #[error("Fetch error: {0}")]
    Fetch(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
