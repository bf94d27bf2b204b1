//! Application shell: launcher buttons and the full-screen dialog that
//! hosts the selected view.

use crate::dashboards::CustomReportsDashboard;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use contracts::dashboards::d404_custom_reports::ReportSettings;
use contracts::shared::shell::ActiveView;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let settings = use_context::<ReportSettings>().unwrap_or_default();
    let car_game_src = StoredValue::new(settings.car_game_src);
    let opened = RwSignal::new(ActiveView::None);

    let open = move |target: ActiveView| {
        log::debug!("Opening {:?}", target);
        opened.set(target);
    };

    // Escape, the overlay and the close icon may all fire for one dismissal.
    let close = Callback::new(move |_: ()| {
        let previous = opened.get_untracked();
        if opened.try_update(|view| view.close()).unwrap_or(false) {
            log::debug!("Closing {:?}", previous);
        }
    });

    view! {
        <div class="launcher">
            <h1>"Click on the following buttons to view the assignment"</h1>
            <div class="launcher__buttons">
                <button class="button button--primary" on:click=move |_| open(ActiveView::CarGame)>
                    "Car Game"
                </button>
                <button class="button button--primary" on:click=move |_| open(ActiveView::PowerBi)>
                    "Power BI"
                </button>
            </div>

            <Show when=move || opened.get().is_open()>
                <ModalFrame on_close=close modal_class="modal--fullscreen">
                    <div class="modal-header">
                        <button
                            class="button button--icon modal__close"
                            title="Close"
                            on:click=move |_| close.run(())
                        >
                            {icon("x")}
                        </button>
                        <h2 class="modal-title">{move || opened.get().title()}</h2>
                    </div>
                    <div class="modal-body launcher__content">
                        {move || match opened.get() {
                            ActiveView::CarGame => view! {
                                <iframe
                                    class="launcher__game"
                                    src={car_game_src.get_value()}
                                    title="Car Game"
                                ></iframe>
                            }.into_any(),
                            ActiveView::PowerBi => view! { <CustomReportsDashboard /> }.into_any(),
                            ActiveView::None => ().into_any(),
                        }}
                    </div>
                </ModalFrame>
            </Show>
        </div>
    }
}
