use leptos::prelude::*;

/// Colour family of a summary tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatTone {
    Primary,
    Success,
    Info,
    Warning,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Primary => "stat-card stat-card--primary",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Info => "stat-card stat-card--info",
            StatTone::Warning => "stat-card stat-card--warning",
        }
    }
}

#[component]
pub fn StatCard(
    /// Caption below the value
    #[prop(into)]
    label: String,
    /// Emoji shown above the value
    #[prop(into)]
    glyph: String,
    /// Already formatted value
    #[prop(into)]
    value: Signal<String>,
    tone: StatTone,
    /// Animation delay for the stagger effect
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    view! {
        <div
            class=tone.class()
            style=format!("animation: fade-in-scale 0.5s ease-out {}ms both;", delay_ms)
        >
            <div class="stat-card__icon">{glyph}</div>
            <div class="stat-card__value">{move || value.get()}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
