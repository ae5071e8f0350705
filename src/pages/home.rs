//! Landing page.

use leptos::prelude::*;

use crate::i18n::{self, Locale};

/// Home page — product tagline and the entry point into registration.
#[component]
pub fn HomePage() -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: &'static str| i18n::translate(locale.get(), key);

    view! {
        <div class="home-page">
            <h1>{move || t("app.title")}</h1>
            <p class="home-page__tagline">{move || t("home.tagline")}</p>
            <a class="btn btn--primary" href="/register">
                {move || t("home.getStarted")}
            </a>
        </div>
    }
}
