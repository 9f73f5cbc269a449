use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookalikeError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("アイドルが見つかりません: {0}")]
    EntryNotFound(String),

    #[error("データセットに{0}件の問題があります")]
    InvalidDataset(usize),

    #[error("ダウンロードエラー: {0}")]
    Download(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Common(lookalike_common::Error),
}

impl From<lookalike_common::Error> for LookalikeError {
    fn from(e: lookalike_common::Error) -> Self {
        match e {
            lookalike_common::Error::EntryNotFound(name) => LookalikeError::EntryNotFound(name),
            lookalike_common::Error::Json(e) => LookalikeError::JsonParse(e),
            lookalike_common::Error::Io(e) => LookalikeError::Io(e),
            other => LookalikeError::Common(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookalikeError>;
