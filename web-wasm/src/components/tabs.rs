//! 詳細ページのタブ

use leptos::prelude::*;

/// タブの種類ごとに表示名を持たせる
pub trait TabKind: Copy + PartialEq + Send + Sync + 'static {
    fn label(&self) -> &'static str;
}

#[component]
pub fn TabBar<T>(
    tabs: Vec<T>,
    active: ReadSignal<T>,
    set_active: WriteSignal<T>,
) -> impl IntoView
where
    T: TabKind,
{
    view! {
        <div class="tab-bar" role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            role="tab"
                            class="tab"
                            class:active=move || active.get() == tab
                            on:click=move |_| set_active.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
