//! データセットの整合性チェック

use crate::types::{Dataset, Entry};
use serde::Serialize;
use std::fmt;

/// `top_10` の最大件数
pub const TOP_N: usize = 10;

/// 検出した問題
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Issue {
    /// キーとEntryの名前が食い違う
    KeyMismatch { key: String, name: String },
    /// ルートEntryに similarity がある
    RootSimilarity { name: String },
    /// マッチEntryに similarity が無い
    MissingSimilarity { root: String, name: String },
    /// similarity が [0, 1] の外
    SimilarityOutOfRange { root: String, name: String, similarity: f64 },
    /// マッチ先がデータセットに無い（クリックしても遷移できない）
    DanglingMatch { root: String, name: String },
    /// top_10 が10件を超える
    TooManyMatches { name: String, count: usize },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::KeyMismatch { key, name } => {
                write!(f, "キー '{}' とEntry名 '{}' が一致しません", key, name)
            }
            Issue::RootSimilarity { name } => {
                write!(f, "{}: ルートEntryに similarity があります", name)
            }
            Issue::MissingSimilarity { root, name } => {
                write!(f, "{} → {}: similarity がありません", root, name)
            }
            Issue::SimilarityOutOfRange { root, name, similarity } => {
                write!(f, "{} → {}: similarity {} が範囲外です", root, name, similarity)
            }
            Issue::DanglingMatch { root, name } => {
                write!(f, "{} → {}: データセットに存在しません", root, name)
            }
            Issue::TooManyMatches { name, count } => {
                write!(f, "{}: top_10 が{}件あります", name, count)
            }
        }
    }
}

/// データセット全体を検査して問題を列挙
pub fn validate(dataset: &Dataset) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (key, entry) in dataset.iter() {
        if key != entry.name {
            issues.push(Issue::KeyMismatch {
                key: key.to_string(),
                name: entry.name.clone(),
            });
        }

        if entry.similarity.is_some() {
            issues.push(Issue::RootSimilarity {
                name: entry.name.clone(),
            });
        }

        if entry.top_10.len() > TOP_N {
            issues.push(Issue::TooManyMatches {
                name: entry.name.clone(),
                count: entry.top_10.len(),
            });
        }

        for matched in entry.top_10.iter().chain(entry.top.values()) {
            check_match(dataset, entry, matched, &mut issues);
        }
    }

    issues
}

fn check_match(dataset: &Dataset, root: &Entry, matched: &Entry, issues: &mut Vec<Issue>) {
    match matched.similarity {
        None => issues.push(Issue::MissingSimilarity {
            root: root.name.clone(),
            name: matched.name.clone(),
        }),
        Some(s) if !(0.0..=1.0).contains(&s) => issues.push(Issue::SimilarityOutOfRange {
            root: root.name.clone(),
            name: matched.name.clone(),
            similarity: s,
        }),
        Some(_) => {}
    }

    if dataset.get(&matched.name).is_none() {
        issues.push(Issue::DanglingMatch {
            root: root.name.clone(),
            name: matched.name.clone(),
        });
    }
}
