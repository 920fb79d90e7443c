use leptos::prelude::*;

/// Colours and text of a pill badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Pill-shaped badge with explicit colours
#[component]
pub fn Badge(badge: BadgeStyle) -> impl IntoView {
    view! {
        <span
            class="badge"
            style=format!("background-color: {}; color: {};", badge.background, badge.foreground)
        >
            {badge.label}
        </span>
    }
}
