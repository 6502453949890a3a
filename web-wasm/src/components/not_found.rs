use johnek_common::Route;
use leptos::prelude::*;

#[component]
pub fn NotFound(#[prop(default = "Page")] kind: &'static str) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>{format!("{} Not Found", kind)}</h1>
            <p class="text-muted">"The page you are looking for does not exist or has been moved."</p>
            <div class="not-found-actions">
                <a href=Route::Home.href() class="btn btn-primary">"Back to Home"</a>
                <a href=Route::Projects.href() class="btn btn-outline">"Browse Projects"</a>
            </div>
        </section>
    }
}
