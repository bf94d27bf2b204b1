use crate::shared::icons::icon;
use leptos::prelude::*;

/// Hero header of a dashboard: pulsing icon badge, title and subtitle.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            {move || icon_name.get().map(|name| view! {
                <div class="page-header__icon">{icon(&name)}</div>
            })}
            <div class="page-header__text">
                <h1 class="page-header__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page-header__subtitle">{s}</div>
                })}
            </div>
        </div>
    }
}
