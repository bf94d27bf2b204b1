//! CardAnimated — a Thaw card that slides in when mounted.
//!
//! The keyframes live in `static/styles.css` (`@keyframes card-slide-in`).
//! Pass increasing `delay_ms` values to stagger a column of cards:
//! ```text
//! <CardAnimated delay_ms=0>   // header
//! <CardAnimated delay_ms=100> // metrics panel
//! <CardAnimated delay_ms=200> // selection panel
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-slide-in` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (stagger effect).
    #[prop(optional)]
    delay_ms: u32,
    /// Extra class for the card.
    #[prop(optional, into)]
    class: String,
    /// Extra inline styles, appended after the animation.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-slide-in 0.6s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-slide-in 0.6s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card class=class attr:style=full_style>
            {children()}
        </Card>
    }
}
