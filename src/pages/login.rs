//! Login page with a username/password form.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::i18n::{self, Locale};
use crate::state::session::SessionStore;

/// Login page — opens a session via the session store and moves to the
/// dashboard on success. API failures render as-is via
/// [`crate::net::api::ApiError::message`].
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: &'static str| i18n::translate(locale.get(), key);

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() || busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match session.login(user.trim(), &pass).await {
                    Ok(_) => navigate(
                        crate::router::DASHBOARD_PATH,
                        NavigateOptions::default(),
                    ),
                    Err(e) => {
                        error.set(Some(e.message()));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass, &session);
        }
    });

    view! {
        <div class="auth-page">
            <h1>{move || t("auth.loginTitle")}</h1>
            <label class="auth-page__label">
                {move || t("auth.username")}
                <input
                    class="auth-page__input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-page__label">
                {move || t("auth.password")}
                <input
                    class="auth-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="auth-page__error">{msg}</p> })}
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                {move || if busy.get() { t("auth.working") } else { t("auth.loginSubmit") }}
            </button>
        </div>
    }
}
