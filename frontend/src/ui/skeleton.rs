//! Skeleton primitive

use leptos::*;

use super::cn;

/// Pulsing block standing in for content that is not there yet.
#[component]
pub fn Skeleton(#[prop(optional)] class: &'static str) -> impl IntoView {
    let class = cn(&["animate-pulse rounded-md bg-accent", class]);

    view! { <div data-slot="skeleton" class=class></div> }
}
