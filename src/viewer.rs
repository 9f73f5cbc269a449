//! ターミナル向けビュー
//!
//! ブラウザと同じ Switcher を操作して画面を作り、テキストに描画する。

use crate::error::{LookalikeError, Result};
use lookalike_common::{Card, Click, Dataset, Section, Switcher, Transition, View};
use std::fmt;

/// show-all（検索語があれば絞り込み）
pub fn list_view(dataset: Dataset, query: Option<&str>) -> View {
    let mut switcher = Switcher::new(dataset);
    if let Some(query) = query {
        switcher.search(query);
    }
    switcher.view().clone()
}

/// show-one
pub fn show_view(dataset: Dataset, name: &str) -> Result<View> {
    let mut switcher = Switcher::new(dataset);
    switcher.click(&Click::Lookup { name: name.to_string() })?;
    Ok(switcher.view().clone())
}

/// show-two
///
/// `b` が `a` のマッチ一覧にあればそのマッチレコード（類似度付き）を使う。
/// 無ければ `b` のルートレコード同士で比較する（類似度0）。
pub fn compare_view(dataset: Dataset, a: &str, b: &str) -> Result<View> {
    let mut switcher = Switcher::new(dataset);
    switcher.click(&Click::Lookup { name: a.to_string() })?;

    let compare = switcher
        .view()
        .cards()
        .into_iter()
        .filter_map(|card| card.on_click.as_ref())
        .find(|click| matches!(click, Click::Compare { matched, .. } if matched.name == b))
        .cloned();

    match compare {
        Some(click) => {
            switcher.click(&click)?;
        }
        None => {
            let dataset = switcher.dataset();
            let root_a = dataset
                .get(a)
                .cloned()
                .ok_or_else(|| LookalikeError::EntryNotFound(a.to_string()))?;
            let root_b = dataset
                .get(b)
                .cloned()
                .ok_or_else(|| LookalikeError::EntryNotFound(b.to_string()))?;
            switcher.change(Transition::ShowTwo(root_a, root_b));
        }
    }

    Ok(switcher.view().clone())
}

/// 画面をテキストに描画
pub fn render_text(view: &View) -> String {
    TextView(view).to_string()
}

/// `View` のテキスト表現
pub struct TextView<'a>(pub &'a View);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        match view {
            View::All { cards } => {
                writeln!(f, "[{}] {}件", view.mode(), cards.len())?;
                for card in cards {
                    writeln!(f, "  {}", card_line(card))?;
                }
            }
            View::One {
                profile,
                matches,
                group_matches,
            } => {
                writeln!(f, "[{}] {}", view.mode(), card_line(profile))?;
                write_section(f, matches)?;
                write_section(f, group_matches)?;
            }
            View::Two { cards, similarity } => {
                writeln!(f, "[{}]", view.mode())?;
                for card in cards {
                    writeln!(f, "  {}", card_line(card))?;
                }
                writeln!(f, "  similarity: {}", similarity)?;
            }
        }
        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter<'_>, section: &Section) -> fmt::Result {
    writeln!(f, "\n== {} ==", section.title)?;
    for (i, card) in section.cards.iter().enumerate() {
        writeln!(f, "  {:>2}. {}", i + 1, card_line(card))?;
    }
    Ok(())
}

fn card_line(card: &Card) -> String {
    match &card.similarity {
        Some(similarity) => format!("{}  {}  {}", card.caption(), similarity, card.image_url),
        None => format!("{}  {}", card.caption(), card.image_url),
    }
}
