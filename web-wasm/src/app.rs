//! メインアプリケーションコンポーネント

use crate::browser;
use crate::components::{navbar::Navbar, not_found::NotFound};
use crate::pages::{
    home::HomePage, project_detail::ProjectDetailPage, projects::ProjectsPage,
    service_detail::ServiceDetailPage,
};
use johnek_common::Route;
use leptos::prelude::*;
use log::info;

/// パスでページを切り替える。ページ間の移動は通常のリンク遷移
#[component]
pub fn App() -> impl IntoView {
    let path = browser::pathname();
    let route = Route::parse(&path);
    info!("event=route module=app status=ok path={} route={:?}", path, route);

    let on_home = route.is_home();
    let page = match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Projects => view! { <ProjectsPage /> }.into_any(),
        Route::ProjectDetail(slug) => view! { <ProjectDetailPage slug=slug /> }.into_any(),
        Route::ServiceDetail(slug) => view! { <ServiceDetailPage slug=slug /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    };

    view! {
        <Navbar on_home=on_home />
        <main>{page}</main>
    }
}
