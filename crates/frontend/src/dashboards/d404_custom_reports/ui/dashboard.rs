use super::metric_picker::MetricPicker;
use super::report_view::ReportView;
use super::selected_metrics::SelectedMetrics;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Button;
use crate::shared::export::download_text;
use crate::shared::icons::icon;
use contracts::dashboards::d404_custom_reports::csv::CSV_MIME_TYPE;
use contracts::dashboards::d404_custom_reports::{generate_rows, ReportBuilder, ReportSettings};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Custom reports mock dashboard: pick metrics, toggle filters, generate a
/// synthetic report, view it and export it as CSV.
#[component]
pub fn CustomReportsDashboard() -> impl IntoView {
    let settings = use_context::<ReportSettings>().unwrap_or_default();
    let builder = RwSignal::new(ReportBuilder::new());
    let root_ref = NodeRef::<html::Div>::new();

    let generate = {
        let delay_ms = settings.generation_delay_ms;
        let row_count = settings.row_count;
        let year = settings.sample_year;
        Callback::new(move |_: leptos::ev::MouseEvent| {
            let Some(metrics) = builder.try_update(|b| b.begin_generation()).flatten() else {
                return;
            };
            log::info!("Generating report for {} metric(s)", metrics.len());

            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                let rows = generate_rows(&metrics, row_count, year, &mut rand::thread_rng());
                let generated = rows.len();
                // The builder may be gone if the dialog closed meanwhile.
                if builder.try_update(|b| b.finish_generation(rows)).is_some() {
                    log::info!("Report generated: {} rows", generated);
                } else {
                    log::warn!("Report builder unmounted before generation finished");
                }
            });
        })
    };

    let toggle_dashboard = Callback::new(move |_: leptos::ev::MouseEvent| {
        builder.update(|b| b.toggle_dashboard());
    });

    let export = {
        let filename = settings.export_filename.clone();
        Callback::new(move |_: leptos::ev::MouseEvent| {
            let Some(csv) = builder.with_untracked(|b| b.export_csv()) else {
                return;
            };
            match download_text(&csv, &filename, CSV_MIME_TYPE) {
                Ok(()) => log::info!("Exported report to {}", filename),
                Err(e) => log::error!("CSV export failed: {}", e),
            }
        })
    };

    let scroll_to_top = move |_| {
        if let Some(root) = root_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            root.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    let is_generating = move || builder.with(|b| b.is_generating());
    let has_report = move || builder.with(|b| b.has_report());
    let preview_rows = settings.preview_rows;

    view! {
        <div class="reports-page" node_ref=root_ref>
            <div class="reports-page__hero" style="animation: card-slide-in 0.6s ease-out both;">
                <PageHeader
                    title="Custom Reports Dashboard"
                    subtitle="Select metrics to generate custom reports and export data"
                    icon_name="dashboard"
                />
            </div>

            <div class="reports-page__grid">
                <MetricPicker builder=builder />

                <div class="reports-page__main">
                    <SelectedMetrics builder=builder />

                    <div class="reports-page__actions">
                        <Button
                            icon_name={Signal::derive(move || {
                                (!is_generating()).then(|| "bar-chart".to_string())
                            })}
                            disabled={Signal::derive(move || !builder.with(|b| b.can_generate()))}
                            on_click=generate
                        >
                            {move || if is_generating() { "Generating..." } else { "Generate Report" }}
                        </Button>
                        <Button
                            variant="outline"
                            icon_name="eye"
                            disabled={Signal::derive(move || !has_report())}
                            on_click=toggle_dashboard
                        >
                            {move || {
                                if builder.with(|b| b.is_dashboard_visible()) {
                                    "Hide Dashboard"
                                } else {
                                    "View Dashboard"
                                }
                            }}
                        </Button>
                        <Button
                            variant="text"
                            icon_name="download"
                            disabled={Signal::derive(move || !has_report())}
                            on_click=export
                        >
                            "Export CSV"
                        </Button>
                    </div>

                    <Show when=is_generating>
                        <div class="reports-page__progress">
                            <div class="progress"><div class="progress__bar"></div></div>
                            <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                <Spinner size=SpinnerSize::Tiny />
                                <span>"Processing your custom report..."</span>
                            </Flex>
                        </div>
                    </Show>
                </div>
            </div>

            <Show when=move || builder.with(|b| b.is_dashboard_visible() && b.has_report())>
                <ReportView builder=builder preview_rows=preview_rows />
            </Show>

            <button class="fab" title="Back to top" on:click=scroll_to_top>
                {icon("trending-up")}
            </button>
        </div>
    }
}
