use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;
use contracts::dashboards::d404_custom_reports::{ReportBuilder, ReportSummary};
use leptos::prelude::*;
use thaw::*;

/// "Report Dashboard": summary tiles, preview table and the integration note.
#[component]
pub fn ReportView(builder: RwSignal<ReportBuilder>, preview_rows: usize) -> impl IntoView {
    let summary = Memo::new(move |_| builder.with(|b| b.summary()));
    let tile = move |f: fn(&ReportSummary) -> String| Signal::derive(move || f(&summary.get()));

    view! {
        <CardAnimated delay_ms=400 class="reports-panel report-view">
            <div class="reports-panel__title">
                <span class="avatar avatar--primary">{icon("analytics")}</span>
                <h2>"Report Dashboard"</h2>
            </div>

            <div class="report-view__stats">
                <StatCard
                    label="Total Records"
                    glyph="\u{1F4CA}"
                    value={tile(|s| s.total_records.to_string())}
                    tone=StatTone::Primary
                />
                <StatCard
                    label="Selected Metrics"
                    glyph="\u{1F4C8}"
                    value={tile(|s| s.selected_metrics.to_string())}
                    tone=StatTone::Success
                    delay_ms=100
                />
                <StatCard
                    label="Active Filters"
                    glyph="\u{1F50D}"
                    value={tile(|s| s.active_filters.to_string())}
                    tone=StatTone::Info
                    delay_ms=200
                />
                <StatCard
                    label="Data Completeness"
                    glyph="\u{2705}"
                    value={tile(|s| s.data_completeness.to_string())}
                    tone=StatTone::Warning
                    delay_ms=300
                />
            </div>

            <div class="report-view__table">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {move || {
                                builder
                                    .with(column_headers)
                                    .into_iter()
                                    .map(|(glyph, name)| view! {
                                        <TableHeaderCell>
                                            <span class="metric-card__glyph">{glyph}</span>
                                            {name}
                                        </TableHeaderCell>
                                    })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            builder
                                .with(|b| preview_cells(b, preview_rows))
                                .into_iter()
                                .enumerate()
                                .map(|(index, cells)| {
                                    view! {
                                        <TableRow attr:style={format!(
                                            "animation: slide-in-left 0.5s ease-out {}ms both;",
                                            index * 50
                                        )}>
                                            {cells
                                                .into_iter()
                                                .map(|value| view! { <TableCell>{value}</TableCell> })
                                                .collect_view()}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>

            {move || {
                hidden_rows_label(builder.with(|b| b.hidden_row_count(preview_rows)))
                    .map(|text| view! { <p class="report-view__more">{text}</p> })
            }}

            <div class="report-view__notice">
                <MessageBar intent=MessageBarIntent::Info>
                    <div>
                        <h4>"\u{1F517} Power BI Integration"</h4>
                        <p>
                            "This report can be integrated with Power BI for advanced analytics and visualization. "
                            "The selected metrics and filters would be passed to Power BI API for real-time dashboard creation."
                        </p>
                    </div>
                </MessageBar>
            </div>
        </CardAnimated>
    }
}

/// Glyph and display name of each selected metric, in selection order.
fn column_headers(builder: &ReportBuilder) -> Vec<(&'static str, &'static str)> {
    builder
        .selected()
        .iter()
        .map(|metric| (metric.metric_type.glyph(), metric.name))
        .collect()
}

/// Cell text of the preview rows over the current selection. Metrics the row
/// was not generated for render as empty cells.
fn preview_cells(builder: &ReportBuilder, limit: usize) -> Vec<Vec<String>> {
    builder
        .preview_rows(limit)
        .iter()
        .map(|row| {
            builder
                .selected()
                .iter()
                .map(|metric| row.get(metric.id).map(|v| v.to_string()).unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Footer line under the preview table, e.g. "... and 40 more records".
fn hidden_rows_label(hidden: usize) -> Option<String> {
    (hidden > 0).then(|| format!("... and {} more records", hidden))
}
