use leptos::prelude::*;

/// Compact select bound to a string value
#[component]
pub fn Select(
    /// Current option value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the value of the chosen option
    on_change: Callback<String>,
    /// `(value, label)` pairs in display order
    options: Vec<(String, String)>,
    /// Accessible name, the select has no visible label
    #[prop(optional, into)]
    aria_label: Option<String>,
) -> impl IntoView {
    let option_views = options
        .into_iter()
        .map(|(val, label)| view! { <option value=val>{label}</option> })
        .collect_view();

    view! {
        <select
            class="form__select"
            aria-label=aria_label
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {option_views}
        </select>
    }
}
