//! プロフィールカードコンポーネント

use leptos::prelude::*;
use lookalike_common::{Card, Click};

/// 名前・画像・類似度のカード。画像クリックでカードの動作を通知する
#[component]
pub fn ProfileCard<F>(card: Card, on_click: F) -> impl IntoView
where
    F: Fn(Click) + 'static + Clone + Send + Sync,
{
    let caption = card.caption();
    let action = card.on_click.clone();

    view! {
        <div class="idol">
            <p class="name">{caption}</p>
            <img
                class="face"
                src=card.image_url.clone()
                alt=card.name.clone()
                on:click=move |_| {
                    if let Some(action) = action.clone() {
                        on_click(action);
                    }
                }
            />
            {card.similarity.clone().map(|similarity| {
                view! { <p class="similarity">{similarity}</p> }
            })}
        </div>
    }
}
