//! データセットの型定義
//!
//! - Entry: アイドル1人分のレコード（ルート／マッチの2種類）
//! - Dataset: 名前 → ルートEntry のマップ（JSONの挿入順を保持）

use crate::error::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// アイドルのプロフィールレコード
///
/// ルートEntry（Datasetの値）は `top_10` と `top` を持つ。
/// マッチEntry（`top_10`/`top` の中身）は表示用フィールドと `similarity` のみ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub group: String,
    pub image_url: String,

    /// 類似度 [0, 1]（マッチEntryのみ）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,

    /// 全体での類似上位10件（ソースの順序のまま）
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_10: Vec<Entry>,

    /// グループ名 → そのグループで最も似ているEntry
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub top: IndexMap<String, Entry>,
}

impl Entry {
    /// マッチEntryを作成（テスト・CLI用）
    pub fn new(name: impl Into<String>, group: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
            image_url: image_url.into(),
            similarity: None,
            top_10: Vec::new(),
            top: IndexMap::new(),
        }
    }

    pub fn with_similarity(mut self, similarity: f64) -> Self {
        self.similarity = Some(similarity);
        self
    }

    /// `top_10` を類似度の降順で返す（同値はソース順）
    pub fn sorted_matches(&self) -> Vec<&Entry> {
        let mut matches: Vec<&Entry> = self.top_10.iter().collect();
        matches.sort_by(|a, b| similarity_key(b).total_cmp(&similarity_key(a)));
        matches
    }

    /// `top` を (グループ, Entry) の組として類似度の降順で返す
    pub fn sorted_group_matches(&self) -> Vec<(&str, &Entry)> {
        let mut matches: Vec<(&str, &Entry)> = self
            .top
            .iter()
            .map(|(group, entry)| (group.as_str(), entry))
            .collect();
        matches.sort_by(|a, b| similarity_key(b.1).total_cmp(&similarity_key(a.1)));
        matches
    }
}

fn similarity_key(entry: &Entry) -> f64 {
    entry.similarity.unwrap_or(0.0)
}

/// 名前 → ルートEntry のデータセット
///
/// 読み込み後は不変。検索結果は新しいDatasetとして作る。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    entries: IndexMap<String, Entry>,
}

impl Dataset {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        Ok(dataset)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 名前で完全一致検索（大文字小文字を区別）
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (名前, Entry) を挿入順に走査
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Entryを挿入順に走査
    pub fn values(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }
}

impl FromIterator<(String, Entry)> for Dataset {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Entry>> for Dataset {
    fn from(entries: Vec<Entry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.name.clone(), entry))
            .collect()
    }
}
