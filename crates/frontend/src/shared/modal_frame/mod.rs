use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Full-screen modal frame (overlay + positioned surface).
///
/// Renders no header of its own; the host decides what goes on top.
/// Closes on Escape and on a press-and-release on the overlay itself.
#[component]
pub fn ModalFrame(
    /// Called when the modal should close (Escape, overlay click).
    on_close: Callback<()>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let escape_listener = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Only close if both press and release happened on the overlay itself,
    // so a text selection dragged outside the surface keeps the modal open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Defer close to next tick: the overlay must not be removed during
            // its own click dispatch.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_class = surface_class(modal_class.as_deref());

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class=modal_class style="position: relative;" on:click=stop_propagation>
                {children()}
            </div>
        </div>
    }
}

fn surface_class(extra: Option<&str>) -> String {
    match extra {
        Some(cls) if !cls.is_empty() => format!("modal {cls}"),
        _ => "modal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_class() {
        assert_eq!(surface_class(None), "modal");
        assert_eq!(surface_class(Some("")), "modal");
        assert_eq!(surface_class(Some("modal--fullscreen")), "modal modal--fullscreen");
    }
}
