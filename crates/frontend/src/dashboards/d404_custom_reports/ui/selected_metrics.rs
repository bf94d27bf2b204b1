use super::type_badge_color;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::ui::Checkbox;
use crate::shared::icons::icon;
use contracts::dashboards::d404_custom_reports::{Metric, ReportBuilder};
use leptos::prelude::*;
use thaw::*;

/// "Selected Metrics" panel: one card per selected metric with its filter
/// checkboxes, or an empty state.
#[component]
pub fn SelectedMetrics(builder: RwSignal<ReportBuilder>) -> impl IntoView {
    let selected_count = move || builder.with(|b| b.selected().len());

    view! {
        <CardAnimated delay_ms=200 class="reports-panel">
            <div class="reports-panel__title">
                <span class="avatar avatar--info">{icon("filter")}</span>
                <h3>{move || format!("Selected Metrics ({})", selected_count())}</h3>
            </div>
            <Show
                when=move || { selected_count() > 0 }
                fallback={|| view! {
                    <div class="selected-metrics__empty">
                        <span class="selected-metrics__empty-icon">{icon("file")}</span>
                        <h4>"No metrics selected"</h4>
                        <p>"Choose metrics from the left panel to get started"</p>
                    </div>
                }}
            >
                <For
                    each=move || builder.with(|b| b.selected().to_vec())
                    key=|metric| metric.id
                    children=move |metric: Metric| view! {
                        <SelectedMetricCard metric=metric builder=builder />
                    }
                />
            </Show>
        </CardAnimated>
    }
}

#[component]
fn SelectedMetricCard(metric: Metric, builder: RwSignal<ReportBuilder>) -> impl IntoView {
    view! {
        <div class="selected-metric">
            <div class="selected-metric__head">
                <div class="metric-card__name">
                    <span class="metric-card__glyph">{metric.metric_type.glyph()}</span>
                    <strong>{metric.name}</strong>
                    <Badge appearance=BadgeAppearance::Filled color={type_badge_color(metric.metric_type)}>
                        {metric.metric_type.as_str()}
                    </Badge>
                </div>
                <button
                    class="button button--icon button--danger"
                    title="Remove metric"
                    on:click=move |_| builder.update(|b| b.toggle_metric(&metric))
                >
                    {icon("x")}
                </button>
            </div>
            <hr class="selected-metric__divider" />
            <div class="selected-metric__filters">
                {metric
                    .filters
                    .iter()
                    .copied()
                    .map(|filter| {
                        let checked = Signal::derive(move || {
                            builder.with(|b| b.filter_state(metric.id, filter))
                        });
                        let on_change = Callback::new(move |value: bool| {
                            builder.update(|b| b.toggle_filter(metric.id, filter, value));
                        });
                        view! {
                            <Checkbox
                                id={filter_input_id(metric.id, filter)}
                                label=filter
                                checked=checked
                                on_change=on_change
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// DOM id of a filter checkbox, e.g. `filter-score-distinct-count`.
fn filter_input_id(metric_id: &str, filter: &str) -> String {
    format!("filter-{}-{}", metric_id, filter.to_lowercase().replace(' ', "-"))
}
