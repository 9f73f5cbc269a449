//! データセット読み込みと画面遷移の結合テスト

use lookalike::viewer;
use lookalike_common::{validate, Click, Dataset, Switcher, View, ViewMode};
use tempfile::tempdir;

const DATASET: &str = r#"{
    "Park Jihyo": {
        "name": "Park Jihyo",
        "group": "twice",
        "image_url": "data/profile/twice/Park Jihyo/jihyo.jpg",
        "top_10": [
            {"name": "Jisoo", "group": "blackpink", "image_url": "data/profile/blackpink/Jisoo/jisoo.jpg", "similarity": 0.57},
            {"name": "Seulgi", "group": "red velvet", "image_url": "data/profile/red velvet/Seulgi/seulgi.jpg", "similarity": 0.73}
        ],
        "top": {
            "blackpink": {"name": "Jisoo", "group": "blackpink", "image_url": "data/profile/blackpink/Jisoo/jisoo.jpg", "similarity": 0.57},
            "red velvet": {"name": "Seulgi", "group": "red velvet", "image_url": "data/profile/red velvet/Seulgi/seulgi.jpg", "similarity": 0.73}
        }
    },
    "Jisoo": {
        "name": "Jisoo",
        "group": "blackpink",
        "image_url": "data/profile/blackpink/Jisoo/jisoo.jpg",
        "top_10": [
            {"name": "Park Jihyo", "group": "twice", "image_url": "data/profile/twice/Park Jihyo/jihyo.jpg", "similarity": 0.57}
        ],
        "top": {
            "twice": {"name": "Park Jihyo", "group": "twice", "image_url": "data/profile/twice/Park Jihyo/jihyo.jpg", "similarity": 0.57}
        }
    },
    "Seulgi": {
        "name": "Seulgi",
        "group": "red velvet",
        "image_url": "data/profile/red velvet/Seulgi/seulgi.jpg",
        "top_10": [
            {"name": "Park Jihyo", "group": "twice", "image_url": "data/profile/twice/Park Jihyo/jihyo.jpg", "similarity": 0.73}
        ],
        "top": {
            "twice": {"name": "Park Jihyo", "group": "twice", "image_url": "data/profile/twice/Park Jihyo/jihyo.jpg", "similarity": 0.73}
        }
    }
}"#;

fn load() -> Dataset {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("lookalike.json");
    std::fs::write(&path, DATASET).unwrap();
    Dataset::from_file(&path).expect("データセット読み込み失敗")
}

/// ファイルから読み込んだデータセットは整合している
#[test]
fn test_load_and_validate() {
    let dataset = load();
    assert_eq!(dataset.len(), 3);
    assert!(validate(&dataset).is_empty());
}

/// show-all はファイルの順序のまま
#[test]
fn test_list_keeps_file_order() {
    let view = viewer::list_view(load(), None);
    let names: Vec<&str> = view.cards().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Park Jihyo", "Jisoo", "Seulgi"]);
}

/// 一覧 → 1人 → 比較 → 相手の1人 → タイトルで一覧、の一連の遷移
#[test]
fn test_full_navigation() {
    let mut switcher = Switcher::new(load());

    switcher.search("park");
    assert_eq!(switcher.view().cards().len(), 1);

    let click = switcher.view().cards()[0].on_click.clone().unwrap();
    assert_eq!(switcher.click(&click).unwrap(), ViewMode::ShowOne);

    let View::One { matches, .. } = switcher.view() else {
        panic!("show-oneではない");
    };
    assert_eq!(matches.cards[0].name, "Seulgi");
    let compare = matches.cards[0].on_click.clone().unwrap();
    assert!(matches!(compare, Click::Compare { .. }));

    assert_eq!(switcher.click(&compare).unwrap(), ViewMode::ShowTwo);
    let View::Two { cards, similarity } = switcher.view() else {
        panic!("show-twoではない");
    };
    assert_eq!(similarity, "73");
    let seulgi = cards[1].on_click.clone().unwrap();

    assert_eq!(switcher.click(&seulgi).unwrap(), ViewMode::ShowOne);
    assert_eq!(switcher.view().cards()[0].caption(), "Seulgi (RED VELVET)");

    assert_eq!(switcher.reset(), ViewMode::ShowAll);
    assert_eq!(switcher.view().cards().len(), 3);
}

/// 比較画面の類似度は1回だけ表示される
#[test]
fn test_compare_text_shows_similarity_once() {
    let view = viewer::compare_view(load(), "Jisoo", "Park Jihyo").unwrap();
    let text = viewer::render_text(&view);
    assert_eq!(text.matches("similarity:").count(), 1);
    assert!(text.contains("similarity: 56.99999999999999"));
}
