//! 読み込み中の表示

use johnek_common::site::FIRM_NAME;
use leptos::prelude::*;

/// トップページのスプラッシュ
#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <div class="splash-mark"></div>
            <p class="splash-name">{FIRM_NAME}</p>
            <div class="spinner"></div>
        </div>
    }
}

/// プロジェクト一覧のスケルトン
#[component]
pub fn ProjectsSkeleton(#[prop(default = 6)] cards: usize) -> impl IntoView {
    view! {
        <div class="container">
            <div class="skeleton skeleton-title"></div>
            <div class="skeleton skeleton-search"></div>
            <div class="project-grid">
                {(0..cards)
                    .map(|_| {
                        view! {
                            <div class="skeleton-card">
                                <div class="skeleton skeleton-image"></div>
                                <div class="skeleton skeleton-line"></div>
                                <div class="skeleton skeleton-line short"></div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
