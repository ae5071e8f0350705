//! Top navigation bar with session controls and the language picker.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::i18n::{self, Locale, SUPPORTED};
use crate::router::{DASHBOARD_PATH, GENERATE_PLAN_PATH, LOGIN_PATH};
use crate::state::session::SessionStore;

/// Application header: brand link, section links for the current session
/// state, logout, and the locale picker.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let locale = expect_context::<RwSignal<Locale>>();
    let navigate = use_navigate();

    let state = session.state();
    let t = move |key: &'static str| i18n::translate(locale.get(), key);
    let authenticated = move || state.get().is_authenticated();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let on_locale = move |ev| {
        if let Some(picked) = Locale::from_tag(&event_target_value(&ev)) {
            locale.set(picked);
        }
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">
                {move || t("app.title")}
            </a>
            <nav class="nav-bar__links">
                <Show
                    when=authenticated
                    fallback=move || {
                        view! {
                            <a class="nav-bar__link" href=LOGIN_PATH>
                                {move || t("nav.login")}
                            </a>
                            <a class="nav-bar__link" href="/register">
                                {move || t("nav.register")}
                            </a>
                        }
                    }
                >
                    <a class="nav-bar__link" href=DASHBOARD_PATH>
                        {move || t("nav.dashboard")}
                    </a>
                    <a class="nav-bar__link" href=GENERATE_PLAN_PATH>
                        {move || t("nav.newPlan")}
                    </a>
                    <button class="nav-bar__logout" on:click=on_logout.clone()>
                        {move || t("nav.logout")}
                    </button>
                </Show>
            </nav>
            <select
                class="nav-bar__locale"
                prop:value=move || locale.get().tag()
                on:change=on_locale
            >
                {SUPPORTED
                    .into_iter()
                    .map(|l| view! { <option value=l.tag()>{l.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </header>
    }
}
