//! Daily-review page for a generated plan.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_params_map;

use crate::i18n::{self, Locale};
use crate::net::api::ApiClient;
#[cfg(feature = "hydrate")]
use crate::net::types::CreateReviewRequest;
use crate::state::session::SessionStore;

/// Review page — records a daily review against the plan named in the
/// route. Reads the plan ID from the route parameter; the review itself is
/// opaque to this layer and passes straight through to the backend.
#[component]
pub fn ReviewPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: &'static str| i18n::translate(locale.get(), key);

    let params = use_params_map();
    let plan_id = move || params.read().get("plan_id").unwrap_or_default();

    let symptoms = RwSignal::new(String::new());
    let side_effects = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let rating = RwSignal::new(3_i32);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let submit = Callback::new(move |_| {
        if symptoms.get().trim().is_empty() || busy.get() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            let review = CreateReviewRequest {
                user_id: session.state().get_untracked().user_id.unwrap_or_default(),
                plan_id: plan_id(),
                date: js_sys::Date::new_0()
                    .to_iso_string()
                    .as_string()
                    .unwrap_or_default(),
                symptoms: symptoms.get().trim().to_owned(),
                side_effects: side_effects.get().trim().to_owned(),
                notes: notes.get().trim().to_owned(),
                rating: rating.get(),
            };
            busy.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match api.create_review(&review).await {
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
            let _ = (&api, &session, plan_id());
        }
    });

    view! {
        <div class="review-page">
            <h1>{move || t("review.title")}</h1>
            <label class="review-page__label">
                {move || t("review.symptoms")}
                <textarea
                    class="review-page__textarea"
                    prop:value=move || symptoms.get()
                    on:input=move |ev| symptoms.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="review-page__label">
                {move || t("review.sideEffects")}
                <textarea
                    class="review-page__textarea"
                    prop:value=move || side_effects.get()
                    on:input=move |ev| side_effects.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="review-page__label">
                {move || t("review.notes")}
                <textarea
                    class="review-page__textarea"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="review-page__label">
                {move || t("review.rating")}
                <select
                    class="review-page__select"
                    prop:value=move || rating.get().to_string()
                    on:change=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                            rating.set(value);
                        }
                    }
                >
                    {(1..=5)
                        .map(|n| view! { <option value=n.to_string()>{n}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            {move || error.get().map(|msg| view! { <p class="review-page__error">{msg}</p> })}
            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                {move || if busy.get() { t("review.saving") } else { t("review.submit") }}
            </button>
        </div>
    }
}
