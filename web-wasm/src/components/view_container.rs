//! 表示モードごとのコンテナ
//!
//! 遷移のたびにコンテナ要素ごと作り直す（3つとも）。
//! 表示対象以外は中身を持たず `hidden` クラスが付く。

use leptos::prelude::*;
use lookalike_common::{Card, Click, Switcher, View, ViewMode, HIDDEN_CLASS};
use crate::components::profile_card::ProfileCard;

/// 3つの表示モードのコンテナを並べる
#[component]
pub fn ViewContainers<F>(switcher: RwSignal<Option<Switcher>>, on_click: F) -> impl IntoView
where
    F: Fn(Click) + 'static + Clone + Send + Sync,
{
    ViewMode::ALL
        .into_iter()
        .map(|mode| {
            view! { <ViewContainer mode=mode switcher=switcher on_click=on_click.clone() /> }
        })
        .collect_view()
}

#[component]
pub fn ViewContainer<F>(
    mode: ViewMode,
    switcher: RwSignal<Option<Switcher>>,
    on_click: F,
) -> impl IntoView
where
    F: Fn(Click) + 'static + Clone + Send + Sync,
{
    move || {
        let on_click = on_click.clone();
        switcher.with(|state| {
            let class = match state {
                Some(s) => s.container_class(mode),
                None => format!("{} {}", mode.as_str(), HIDDEN_CLASS),
            };
            let content = state
                .as_ref()
                .filter(|s| s.mode() == mode)
                .map(|s| render_view(s.view(), on_click));

            view! { <div class=class>{content}</div> }
        })
    }
}

fn render_view<F>(screen: &View, on_click: F) -> AnyView
where
    F: Fn(Click) + 'static + Clone + Send + Sync,
{
    let render_cards = |cards: &[Card]| {
        cards
            .iter()
            .cloned()
            .map(|card| view! { <ProfileCard card=card on_click=on_click.clone() /> })
            .collect_view()
    };

    match screen {
        View::All { cards } => view! {
            <div class="idols">{render_cards(cards.as_slice())}</div>
        }
        .into_any(),
        View::One {
            profile,
            matches,
            group_matches,
        } => view! {
            <div class="idols">{render_cards(std::slice::from_ref(profile))}</div>
            <h2 class="subtitle">{matches.title}</h2>
            <div class="idols">{render_cards(matches.cards.as_slice())}</div>
            <h2 class="subtitle">{group_matches.title}</h2>
            <div class="idols">{render_cards(group_matches.cards.as_slice())}</div>
        }
        .into_any(),
        View::Two { cards, similarity } => view! {
            <div class="idols">{render_cards(&cards[..])}</div>
            <p class="similarity">{similarity.clone()}</p>
        }
        .into_any(),
    }
}
