//! ビューモデル
//!
//! 3つの表示モード（show-all / show-one / show-two）それぞれの
//! 画面内容を、DOMに依存しない記述として組み立てる。

use crate::profile::{format_similarity, profile_card, Card, Click};
use crate::types::Entry;
use serde::Serialize;

/// 表示モード（常にどれか1つだけが表示される）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    ShowAll,
    ShowOne,
    ShowTwo,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::ShowAll, ViewMode::ShowOne, ViewMode::ShowTwo];

    /// コンテナ要素のクラス名
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::ShowAll => "show-all",
            ViewMode::ShowOne => "show-one",
            ViewMode::ShowTwo => "show-two",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show-all" => Ok(ViewMode::ShowAll),
            "show-one" => Ok(ViewMode::ShowOne),
            "show-two" => Ok(ViewMode::ShowTwo),
            _ => Err(format!("invalid mode: {}", s)),
        }
    }
}

pub const MATCHES_TITLE: &str = "Matches";
pub const GROUP_MATCHES_TITLE: &str = "Group Matches";

/// 見出し付きのカード列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub cards: Vec<Card>,
}

/// 1画面分の内容
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode")]
pub enum View {
    /// 一覧
    #[serde(rename = "show-all")]
    All { cards: Vec<Card> },
    /// 1人 + 類似上位 + グループ別の類似
    #[serde(rename = "show-one")]
    One {
        profile: Card,
        matches: Section,
        group_matches: Section,
    },
    /// 2人の比較と類似度（1回だけ表示）
    #[serde(rename = "show-two")]
    Two { cards: [Card; 2], similarity: String },
}

impl View {
    pub fn mode(&self) -> ViewMode {
        match self {
            View::All { .. } => ViewMode::ShowAll,
            View::One { .. } => ViewMode::ShowOne,
            View::Two { .. } => ViewMode::ShowTwo,
        }
    }

    /// 画面上の全カード（表示順）
    pub fn cards(&self) -> Vec<&Card> {
        match self {
            View::All { cards } => cards.iter().collect(),
            View::One {
                profile,
                matches,
                group_matches,
            } => std::iter::once(profile)
                .chain(matches.cards.iter())
                .chain(group_matches.cards.iter())
                .collect(),
            View::Two { cards, .. } => cards.iter().collect(),
        }
    }
}

/// show-all: 入力順のままカードを並べる（ソートしない）
pub fn show_all<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> View {
    let cards = entries
        .into_iter()
        .map(|entry| {
            profile_card(entry, false).with_click(Click::Lookup {
                name: entry.name.clone(),
            })
        })
        .collect();
    View::All { cards }
}

/// show-one: 本人のカードと、類似度降順のマッチ2セクション
pub fn show_one(entry: &Entry) -> View {
    let profile = profile_card(entry, false).with_click(Click::Reset);

    let compare = |matched: &Entry| {
        profile_card(matched, true).with_click(Click::Compare {
            root: entry.name.clone(),
            matched: Box::new(matched.clone()),
        })
    };

    let matches = Section {
        title: MATCHES_TITLE,
        cards: entry.sorted_matches().into_iter().map(compare).collect(),
    };

    let group_matches = Section {
        title: GROUP_MATCHES_TITLE,
        cards: entry
            .sorted_group_matches()
            .into_iter()
            .map(|(_, matched)| compare(matched))
            .collect(),
    };

    View::One {
        profile,
        matches,
        group_matches,
    }
}

/// show-two: 2人を並べ、類似度を1つだけ表示
pub fn show_two(a: &Entry, b: &Entry) -> View {
    let card = |entry: &Entry| {
        profile_card(entry, false).with_click(Click::Lookup {
            name: entry.name.clone(),
        })
    };

    View::Two {
        cards: [card(a), card(b)],
        similarity: format_similarity(combined_similarity(a, b)),
    }
}

/// [a, b] の順で最初に見つかった `similarity` の百分率（無ければ0）
pub fn combined_similarity(a: &Entry, b: &Entry) -> f64 {
    [a, b]
        .iter()
        .find_map(|entry| entry.similarity)
        .map(|s| s * 100.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Entry {
        let mut entry = Entry::new("Jisoo", "blackpink", "jisoo.jpg");
        entry.top_10 = vec![
            Entry::new("Irene", "red velvet", "irene.jpg").with_similarity(0.41),
            Entry::new("Nayeon", "twice", "nayeon.jpg").with_similarity(0.88),
            Entry::new("Lisa", "blackpink", "lisa.jpg").with_similarity(0.63),
        ];
        entry.top.insert(
            "red velvet".into(),
            Entry::new("Irene", "red velvet", "irene.jpg").with_similarity(0.41),
        );
        entry.top.insert(
            "twice".into(),
            Entry::new("Nayeon", "twice", "nayeon.jpg").with_similarity(0.88),
        );
        entry
    }

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_view_mode_str() {
        assert_eq!(ViewMode::ShowAll.as_str(), "show-all");
        assert_eq!("show-two".parse::<ViewMode>(), Ok(ViewMode::ShowTwo));
        assert!("show-three".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_show_all_keeps_input_order() {
        let entries = vec![
            Entry::new("Zoe", "z", "z.jpg"),
            Entry::new("Amy", "a", "a.jpg"),
            Entry::new("Mia", "m", "m.jpg"),
        ];
        let view = show_all(&entries);
        let View::All { cards } = &view else {
            panic!("show-allではない: {:?}", view);
        };
        assert_eq!(names(cards), vec!["Zoe", "Amy", "Mia"]);
        assert_eq!(
            cards[1].on_click,
            Some(Click::Lookup { name: "Amy".into() })
        );
    }

    #[test]
    fn test_show_one_sections_sorted_descending() {
        let view = show_one(&root());
        let View::One {
            profile,
            matches,
            group_matches,
        } = &view
        else {
            panic!("show-oneではない: {:?}", view);
        };

        assert_eq!(profile.similarity, None);
        assert_eq!(profile.on_click, Some(Click::Reset));

        assert_eq!(matches.title, "Matches");
        assert_eq!(names(&matches.cards), vec!["Nayeon", "Lisa", "Irene"]);
        assert_eq!(matches.cards[0].similarity.as_deref(), Some("88"));

        assert_eq!(group_matches.title, "Group Matches");
        assert_eq!(names(&group_matches.cards), vec!["Nayeon", "Irene"]);
    }

    #[test]
    fn test_show_one_match_click_compares_with_root() {
        let root = root();
        let view = show_one(&root);
        let View::One { matches, .. } = &view else {
            panic!("show-oneではない");
        };
        match &matches.cards[0].on_click {
            Some(Click::Compare { root: r, matched }) => {
                assert_eq!(r, "Jisoo");
                assert_eq!(matched.name, "Nayeon");
            }
            other => panic!("Compareではない: {:?}", other),
        }
    }

    #[test]
    fn test_show_two_uses_first_similarity() {
        let a = Entry::new("Jisoo", "blackpink", "jisoo.jpg");
        let b = Entry::new("Irene", "red velvet", "irene.jpg").with_similarity(0.73);
        let view = show_two(&a, &b);
        let View::Two { cards, similarity } = &view else {
            panic!("show-twoではない");
        };
        assert_eq!(similarity, "73");
        assert!(cards.iter().all(|c| c.similarity.is_none()));
        assert_eq!(
            cards[1].on_click,
            Some(Click::Lookup { name: "Irene".into() })
        );
    }

    #[test]
    fn test_show_two_prefers_first_entry() {
        let a = Entry::new("A", "g", "a.jpg").with_similarity(0.5);
        let b = Entry::new("B", "g", "b.jpg").with_similarity(0.9);
        assert_eq!(combined_similarity(&a, &b), 50.0);
    }

    #[test]
    fn test_show_two_without_similarity() {
        let a = Entry::new("A", "g", "a.jpg");
        let b = Entry::new("B", "g", "b.jpg");
        let View::Two { similarity, .. } = show_two(&a, &b) else {
            panic!("show-twoではない");
        };
        assert_eq!(similarity, "0");
    }

    #[test]
    fn test_view_serialize() {
        let a = Entry::new("A", "g", "a.jpg");
        let b = Entry::new("B", "g", "b.jpg").with_similarity(0.5);
        let json = serde_json::to_string(&show_two(&a, &b)).unwrap();
        assert!(json.contains("\"mode\":\"show-two\""));
        assert!(json.contains("\"similarity\":\"50\""));
        assert!(json.contains("\"action\":\"lookup\""));
    }

    #[test]
    fn test_view_serialize_mode_names() {
        let entry = root();
        for (view, mode) in [
            (show_all([&entry]), "show-all"),
            (show_one(&entry), "show-one"),
            (show_two(&entry, &entry.top_10[0]), "show-two"),
        ] {
            let json = serde_json::to_value(&view).unwrap();
            assert_eq!(json["mode"], mode);
            assert_eq!(view.mode().as_str(), mode);
        }
    }

    #[test]
    fn test_show_one_json_does_not_repeat_root() {
        let mut entry = Entry::new("Root", "group", "root.jpg");
        for i in 0..10 {
            let matched = Entry::new(format!("Match{}", i), format!("group{}", i), format!("m{}.jpg", i))
                .with_similarity(i as f64 / 10.0);
            entry.top.insert(format!("group{}", i), matched.clone());
            entry.top_10.push(matched);
        }
        let root_len = serde_json::to_string(&entry).unwrap().len();
        let view_json = serde_json::to_string(&show_one(&entry)).unwrap();

        // 20枚のマッチカードそれぞれがルートの名前だけを持つ
        assert!(!view_json.contains("top_10"));
        assert!(view_json.len() < root_len * 4, "{} >= {} * 4", view_json.len(), root_len);
    }
}
