//! Dashboard page listing the user's medication reviews.

use leptos::prelude::*;

use crate::components::review_card::ReviewCard;
use crate::i18n::{self, Locale};
use crate::net::api::ApiClient;
use crate::router::GENERATE_PLAN_PATH;
use crate::state::session::SessionStore;

/// Dashboard page — greets the session's user and lists their reviews.
///
/// After a reload the display name is gone (it is never persisted), so the
/// greeting falls back to the user id.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let api = expect_context::<ApiClient>();
    let locale = expect_context::<RwSignal<Locale>>();
    let t = move |key: &'static str| i18n::translate(locale.get(), key);

    let state = session.state();
    let display_name = move || {
        let state = state.get();
        state
            .user
            .map(|user| user.username)
            .or(state.user_id)
            .unwrap_or_default()
    };

    // Review list resource — fetches on mount and again if the session's
    // user changes.
    let reviews = LocalResource::new(move || {
        let api = api.clone();
        let user_id = state.get().user_id.unwrap_or_default();
        async move {
            if user_id.is_empty() {
                Ok(Vec::new())
            } else {
                api.fetch_reviews(&user_id).await
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{move || t("dashboard.title")}</h1>
                <span class="dashboard-page__user">
                    {move || t("dashboard.signedInAs")} " " {display_name}
                </span>
                <a class="btn btn--primary" href=GENERATE_PLAN_PATH>
                    {move || t("nav.newPlan")}
                </a>
            </header>

            <Suspense fallback=move || {
                view! { <p class="dashboard-page__loading">{move || t("dashboard.loading")}</p> }
            }>
                {move || {
                    reviews
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="dashboard-page__empty">
                                            {move || t("dashboard.empty")}
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="dashboard-page__list">
                                            {list
                                                .into_iter()
                                                .map(|review| view! { <ReviewCard review=review/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => {
                                view! { <p class="dashboard-page__error">{e.message()}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
