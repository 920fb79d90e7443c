//! CardAnimated: Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in `style/dashboard.css`. Pass growing
//! `delay_ms` values to neighbouring cards for a staggered entrance.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Optional heading rendered at the top of the card
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra classes on the card root, e.g. a grid span modifier
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=format!("dashboard-card {}", class) attr:style=style>
            {title.map(|t| view! { <h2 class="dashboard-card__title">{t}</h2> })}
            {children()}
        </Card>
    }
}
