//! 名前・グループの前方一致検索

use crate::types::Dataset;

/// 半角に置き換える全角数字
const FULL_WIDTH_DIGITS: &[(char, char)] = &[('４', '4'), ('６', '6'), ('８', '8')];

/// 検索語を正規化（大文字化 + 全角数字の一部を半角へ）
pub fn normalize_query(raw: &str) -> String {
    raw.to_uppercase()
        .chars()
        .map(|c| {
            FULL_WIDTH_DIGITS
                .iter()
                .find(|(full, _)| *full == c)
                .map(|(_, half)| *half)
                .unwrap_or(c)
        })
        .collect()
}

/// 名前またはグループが検索語で始まるEntryだけを残した新しいDatasetを返す
///
/// 比較は大文字小文字を区別しない。空の検索語は全件に一致する。
pub fn search(dataset: &Dataset, raw_query: &str) -> Dataset {
    let query = normalize_query(raw_query);

    dataset
        .iter()
        .filter(|(name, entry)| {
            name.to_uppercase().starts_with(&query) || entry.group.to_uppercase().starts_with(&query)
        })
        .map(|(name, entry)| (name.to_string(), entry.clone()))
        .collect()
}
