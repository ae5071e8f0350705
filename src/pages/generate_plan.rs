//! Plan-generation page: medication name + focus areas → a new plan.

#[cfg(test)]
#[path = "generate_plan_test.rs"]
mod generate_plan_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::i18n::{self, Locale};
use crate::net::api::ApiClient;
use crate::state::session::SessionStore;

/// Split the free-form focus-areas input into clean entries.
pub fn split_focus_areas(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|area| !area.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Plan-generation page — posts the form and moves to the review page of
/// the freshly generated plan.
#[component]
pub fn GeneratePlanPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: &'static str| i18n::translate(locale.get(), key);

    let medication = RwSignal::new(String::new());
    let focus_areas = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        let name = medication.get();
        if name.trim().is_empty() || busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let user_id = session.state().get_untracked().user_id.unwrap_or_default();
            let areas = split_focus_areas(&focus_areas.get());
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match api.generate_plan(&user_id, name.trim(), &areas).await {
                    Ok(plan) => {
                        match plan.id.as_ref().and_then(crate::net::types::object_id) {
                            Some(plan_id) => {
                                navigate(
                                    &format!("/review/{plan_id}"),
                                    NavigateOptions::default(),
                                );
                            }
                            None => {
                                error.set(Some(i18n::translate(
                                    locale.get_untracked(),
                                    "plan.invalidResponse",
                                )));
                                busy.set(false);
                            }
                        }
                    }
                    Err(e) => {
                        error.set(Some(e.message()));
                        busy.set(false);
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, &api, &session);
        }
    });

    view! {
        <div class="plan-page">
            <h1>{move || t("plan.title")}</h1>
            <label class="plan-page__label">
                {move || t("plan.medicationName")}
                <input
                    class="plan-page__input"
                    type="text"
                    prop:value=move || medication.get()
                    on:input=move |ev| medication.set(event_target_value(&ev))
                />
            </label>
            <label class="plan-page__label">
                {move || t("plan.focusAreas")}
                <input
                    class="plan-page__input"
                    type="text"
                    placeholder=move || t("plan.focusAreasHint")
                    prop:value=move || focus_areas.get()
                    on:input=move |ev| focus_areas.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="plan-page__error">{msg}</p> })}
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                {move || if busy.get() { t("plan.generating") } else { t("plan.submit") }}
            </button>
        </div>
    }
}
