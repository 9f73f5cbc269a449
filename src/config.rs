use crate::error::{LookalikeError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// データセットのパスを上書きする環境変数
pub const DATA_ENV: &str = "LOOKALIKE_DATA";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data_path: PathBuf,
    pub profile_dir: PathBuf,
    pub download_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("lookalike.json"),
            profile_dir: PathBuf::from("data/profile"),
            download_concurrency: 8,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LookalikeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("lookalike").join("config.json"))
    }

    /// 使用するデータセットのパス
    ///
    /// 優先順位: コマンド引数 > 環境変数 > 設定ファイル
    pub fn resolve_data_path(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| std::env::var_os(DATA_ENV).map(PathBuf::from))
            .unwrap_or_else(|| self.data_path.clone())
    }

    pub fn set_data_path(&mut self, path: PathBuf) -> Result<()> {
        self.data_path = path;
        self.save()
    }
}
