use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text input with an optional leading icon
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the new text on every keystroke
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Icon name from the icon() helper, drawn inside the field on the left
    #[prop(optional, into)]
    leading_icon: Option<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_class = if leading_icon.is_some() {
        "form__input form__input--with-icon"
    } else {
        "form__input"
    };

    view! {
        <div class="form__input-wrap">
            {leading_icon.map(|name| view! {
                <span class="form__input-icon">{icon(&name)}</span>
            })}
            <input
                class=input_class
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
