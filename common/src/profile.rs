//! プロフィールカード
//!
//! Entry 1件を表示用のカード記述に変換する。クリック時の動作は
//! 呼び出し側（ビュービルダー）が `Click` として付与する。

use crate::types::Entry;
use serde::Serialize;

/// カード画像クリック時の動作
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Click {
    /// 名前でデータセットを引き直して show-one へ
    Lookup { name: String },
    /// データセット全体で show-all へ
    Reset,
    /// ルートEntry（名前で引き直す）とマッチEntryで show-two へ
    Compare { root: String, matched: Box<Entry> },
}

/// 1人分の表示カード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub name: String,
    /// 大文字化済みのグループ名
    pub group: String,
    pub image_url: String,
    /// 類似度ラベル（`similarity * 100` をそのまま文字列化）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_click: Option<Click>,
}

impl Card {
    /// "名前 (GROUP)" 形式の見出し
    pub fn caption(&self) -> String {
        format!("{} ({})", self.name, self.group)
    }

    pub fn with_click(mut self, click: Click) -> Self {
        self.on_click = Some(click);
        self
    }
}

/// Entryからカードを作成
///
/// 類似度ラベルは `similarity` があり、かつ `show_similarity` の時のみ付く。
pub fn profile_card(entry: &Entry, show_similarity: bool) -> Card {
    let similarity = entry
        .similarity
        .filter(|_| show_similarity)
        .map(|s| format_similarity(s * 100.0));

    Card {
        name: entry.name.clone(),
        group: entry.group.to_uppercase(),
        image_url: entry.image_url.clone(),
        similarity,
        on_click: None,
    }
}

/// パーセント値を丸めずに文字列化（"%" は付けない）
///
/// f64 の Display は最短の往復可能表現なので、0.57 * 100 は
/// "56.99999999999999" になる。ブラウザ側の数値表示と揃えるため、
/// -0 は "0"、絶対値が 1e-6 未満か 1e21 以上なら指数表記にする。
pub fn format_similarity(percent: f64) -> String {
    if percent == 0.0 {
        return "0".to_string();
    }
    if percent.is_nan() {
        return "NaN".to_string();
    }
    if percent.is_infinite() {
        return if percent > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = percent.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        // 正の指数には "+" が付く（1e+21）
        let exp = format!("{:e}", percent);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
            _ => exp,
        }
    } else {
        format!("{}", percent)
    }
}
