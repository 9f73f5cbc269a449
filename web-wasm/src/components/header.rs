//! ヘッダーコンポーネント（タイトルと検索欄）

use leptos::prelude::*;

#[component]
pub fn Header<FT, FS>(on_title_click: FT, on_search: FS) -> impl IntoView
where
    FT: Fn(()) + 'static + Clone,
    FS: Fn(String) + 'static + Clone,
{
    view! {
        <header class="header">
            <h1 class="title" on:click=move |_| on_title_click(())>
                "Idol Lookalike"
            </h1>
            <input
                type="text"
                class="search"
                placeholder="名前・グループで検索..."
                on:input=move |ev| on_search(event_target_value(&ev))
            />
        </header>
    }
}
