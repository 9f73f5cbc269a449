//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lookalike_common::{Click, Switcher};
use crate::api::dataset::{fetch_dataset, DATASET_URL};
use crate::components::{header::Header, view_container::ViewContainers};

/// データセットの読み込み状態
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let switcher = RwSignal::new(None::<Switcher>);

    // 起動時に1回だけデータセットを取得
    spawn_local(async move {
        match fetch_dataset(DATASET_URL).await {
            Ok(dataset) => {
                console::log!(format!("loaded {} idols", dataset.len()));
                switcher.set(Some(Switcher::new(dataset)));
                set_load_state.set(LoadState::Ready);
            }
            Err(e) => {
                console::error!(format!("dataset load failed: {}", e));
                set_load_state.set(LoadState::Failed(e.to_string()));
            }
        }
    });

    // 遷移のたびに先頭へスクロール
    Effect::new(move |_| {
        let generation = switcher.with(|s| s.as_ref().map(Switcher::generation));
        if generation.is_some() {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
        }
    });

    // カード画像クリック
    let on_card_click = move |click: Click| {
        if let Click::Lookup { name } = &click {
            console::log!(name.clone());
        }

        let resolved = switcher.with_untracked(|s| s.as_ref().map(|s| s.resolve(&click)));
        match resolved {
            Some(Ok(transition)) => switcher.update(|s| {
                if let Some(s) = s {
                    s.change(transition);
                }
            }),
            // 見つからなければ今の画面のまま
            Some(Err(e)) => console::error!(e.to_string()),
            None => {}
        }
    };

    let on_title_click = move |_: ()| {
        switcher.update(|s| {
            if let Some(s) = s {
                s.reset();
            }
        });
    };

    let on_search = move |query: String| {
        switcher.update(|s| {
            if let Some(s) = s {
                s.search(&query);
            }
        });
    };

    view! {
        <div class="container">
            <Header on_title_click=on_title_click on_search=on_search />

            {move || match load_state.get() {
                LoadState::Loading => Some(view! { <p class="loading">"Loading..."</p> }.into_any()),
                LoadState::Failed(message) => Some(
                    view! { <p class="error">{format!("データの読み込みに失敗しました: {}", message)}</p> }
                        .into_any(),
                ),
                LoadState::Ready => None,
            }}

            <ViewContainers switcher=switcher on_click=on_card_click />
        </div>
    }
}
