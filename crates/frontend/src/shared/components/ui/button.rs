use crate::shared::icons::icon;
use leptos::prelude::*;

/// Button with variants ("primary", "outline", "text") and an optional leading icon
#[component]
pub fn Button(
    /// Button variant: "primary" (default), "outline" or "text"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Icon name from the icon() helper, rendered before the label
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "outline" => "button--outline",
        "text" => "button--text",
        _ => "button--primary",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button {} {}", variant_class(), additional_class())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {move || icon_name.get().map(|name| view! {
                <span class="button__icon">{icon(&name)}</span>
            })}
            {children()}
        </button>
    }
}
