//! 表示モード切替
//!
//! データセット（読み込み後は不変）と現在の画面を保持する状態オブジェクト。
//! 遷移は `change` だけが行い、遷移ごとに世代番号が進む。
//! 描画側は世代が変わったら3つのコンテナをすべて作り直し、
//! 対象モード以外に `hidden` クラスを付け、スクロール位置を先頭に戻す。

use crate::error::{Error, Result};
use crate::profile::Click;
use crate::search::search;
use crate::types::{Dataset, Entry};
use crate::view::{show_all, show_one, show_two, View, ViewMode};
use std::sync::Arc;

/// 非表示用のクラス名
pub const HIDDEN_CLASS: &str = "hidden";

/// 遷移先とその表示データ
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    ShowAll(Arc<Dataset>),
    ShowOne(Entry),
    ShowTwo(Entry, Entry),
}

impl Transition {
    pub fn mode(&self) -> ViewMode {
        match self {
            Transition::ShowAll(_) => ViewMode::ShowAll,
            Transition::ShowOne(_) => ViewMode::ShowOne,
            Transition::ShowTwo(..) => ViewMode::ShowTwo,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Switcher {
    dataset: Arc<Dataset>,
    view: View,
    generation: u64,
}

impl Switcher {
    /// 初期状態は全件の show-all
    pub fn new(dataset: Dataset) -> Self {
        let dataset = Arc::new(dataset);
        let view = show_all(dataset.values());
        Self {
            dataset,
            view,
            generation: 1,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// 遷移のたびに1ずつ増える
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 指定モードへ遷移して画面を組み立て直す
    pub fn change(&mut self, transition: Transition) -> ViewMode {
        self.view = match &transition {
            Transition::ShowAll(dataset) => show_all(dataset.values()),
            Transition::ShowOne(entry) => show_one(entry),
            Transition::ShowTwo(a, b) => show_two(a, b),
        };
        self.generation += 1;
        self.mode()
    }

    /// クリック動作を遷移に解決する（状態は変えない）
    ///
    /// 名前がデータセットに無い場合は `EntryNotFound`。
    /// マッチEntryは `top_10`/`top` を持たないので、必ず名前で引き直す。
    pub fn resolve(&self, click: &Click) -> Result<Transition> {
        match click {
            Click::Lookup { name } => self
                .dataset
                .get(name)
                .cloned()
                .map(Transition::ShowOne)
                .ok_or_else(|| Error::EntryNotFound(name.clone())),
            Click::Reset => Ok(Transition::ShowAll(Arc::clone(&self.dataset))),
            Click::Compare { root, matched } => self
                .dataset
                .get(root)
                .cloned()
                .map(|root| Transition::ShowTwo(root, matched.as_ref().clone()))
                .ok_or_else(|| Error::EntryNotFound(root.clone())),
        }
    }

    /// クリックを処理する。失敗時は現在の画面のまま
    pub fn click(&mut self, click: &Click) -> Result<ViewMode> {
        let transition = self.resolve(click)?;
        Ok(self.change(transition))
    }

    /// 検索語で絞り込んだ show-all へ
    pub fn search(&mut self, raw_query: &str) -> ViewMode {
        let found = search(&self.dataset, raw_query);
        self.change(Transition::ShowAll(Arc::new(found)))
    }

    /// タイトルクリック: 全件の show-all へ戻る
    pub fn reset(&mut self) -> ViewMode {
        self.change(Transition::ShowAll(Arc::clone(&self.dataset)))
    }

    pub fn is_hidden(&self, mode: ViewMode) -> bool {
        self.mode() != mode
    }

    /// コンテナ要素の class 属性値
    pub fn container_class(&self, mode: ViewMode) -> String {
        if self.is_hidden(mode) {
            format!("{} {}", mode.as_str(), HIDDEN_CLASS)
        } else {
            mode.as_str().to_string()
        }
    }
}
