use super::type_badge_color;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use contracts::dashboards::d404_custom_reports::{Metric, ReportBuilder, METRIC_CATALOG};
use leptos::prelude::*;
use thaw::*;

/// "Available Metrics" panel: one clickable card per catalog entry.
#[component]
pub fn MetricPicker(builder: RwSignal<ReportBuilder>) -> impl IntoView {
    view! {
        <CardAnimated delay_ms=100 class="reports-panel">
            <div class="reports-panel__title">
                <span class="avatar avatar--success">{icon("plus")}</span>
                <h3>{format!("Available Metrics ({})", METRIC_CATALOG.len())}</h3>
            </div>
            <div class="metric-picker__list">
                {METRIC_CATALOG
                    .iter()
                    .enumerate()
                    .map(|(index, metric)| view! {
                        <MetricCard metric={*metric} builder=builder delay_ms={index as u32 * 50} />
                    })
                    .collect_view()}
            </div>
        </CardAnimated>
    }
}

#[component]
fn MetricCard(metric: Metric, builder: RwSignal<ReportBuilder>, delay_ms: u32) -> impl IntoView {
    let is_selected = move || builder.with(|b| b.is_selected(metric.id));

    let card_class = move || {
        if is_selected() {
            "metric-card metric-card--selected"
        } else {
            "metric-card"
        }
    };

    view! {
        <div
            class=card_class
            style=format!("animation: fade-in-scale 0.5s ease-out {}ms both;", delay_ms)
            on:click=move |_| builder.update(|b| b.toggle_metric(&metric))
        >
            <div class="metric-card__head">
                <div class="metric-card__name">
                    <span class="metric-card__glyph">{metric.metric_type.glyph()}</span>
                    <span>{metric.name}</span>
                </div>
                <Show when=is_selected>
                    <span class="metric-card__check">"\u{2713}"</span>
                </Show>
            </div>
            <div class="metric-card__badges">
                <Badge appearance=BadgeAppearance::Outline color={type_badge_color(metric.metric_type)}>
                    {metric.metric_type.as_str()}
                </Badge>
                <Badge appearance=BadgeAppearance::Outline color=BadgeColor::Subtle>
                    {format!("{} filters", metric.filters.len())}
                </Badge>
            </div>
        </div>
    }
}
