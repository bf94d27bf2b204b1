use leptos::prelude::*;

/// Labelled checkbox
#[component]
pub fn Checkbox(
    /// Label text
    #[prop(into)]
    label: String,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Change event handler, receives the new checked state
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// ID for the input, ties the label to it
    #[prop(into)]
    id: String,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=id>
                {label}
            </label>
        </div>
    }
}
