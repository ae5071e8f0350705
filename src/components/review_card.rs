//! Card for a single medication review in the dashboard list.

use leptos::prelude::*;

use crate::i18n::{self, Locale};
use crate::net::types::MedicationReview;

/// A review summary: rating plus the recorded observations.
#[component]
pub fn ReviewCard(review: MedicationReview) -> impl IntoView {
    let locale = expect_context::<RwSignal<Locale>>();
    let rating_label = move || i18n::translate(locale.get(), "dashboard.rating");

    let MedicationReview {
        symptoms,
        side_effects,
        notes,
        rating,
        ..
    } = review;

    let side_effects = (!side_effects.is_empty())
        .then(|| view! { <p class="review-card__side-effects">{side_effects.clone()}</p> });
    let notes =
        (!notes.is_empty()).then(|| view! { <p class="review-card__notes">{notes.clone()}</p> });

    view! {
        <article class="review-card">
            <span class="review-card__rating">{rating_label} ": " {rating} "/5"</span>
            <p class="review-card__symptoms">{symptoms}</p>
            {side_effects}
            {notes}
        </article>
    }
}
