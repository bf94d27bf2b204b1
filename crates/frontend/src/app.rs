use crate::app_shell::AppShell;
use contracts::dashboards::d404_custom_reports::{load_settings, ReportSettings};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Demo settings are shared with the whole tree via context.
    let settings = load_settings().unwrap_or_else(|e| {
        log::warn!("Embedded settings are invalid, using defaults: {}", e);
        ReportSettings::default()
    });
    provide_context(settings);

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
