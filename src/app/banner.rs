use leptos::prelude::*;

use crate::ascii::MONOGRAM;
#[cfg(feature = "hydrate")]
use crate::ascii::{morph, ping_pong, INITIALS};

#[cfg(feature = "hydrate")]
const FRAME_MS: u64 = 60;
#[cfg(feature = "hydrate")]
const MORPH_STEPS: u32 = 30;
#[cfg(feature = "hydrate")]
const HOLD_STEPS: u32 = 40;

/// Hero monogram that keeps morphing between the box-drawing and plain-letter frames.
#[component]
pub fn Banner(owner: String, tagline: String) -> impl IntoView {
    let (frame, set_frame) = signal(MONOGRAM.to_string());

    #[cfg(feature = "hydrate")]
    {
        use std::time::Duration;

        log::info!("\n{MONOGRAM}\n\n  {owner}\n  {tagline}\n");

        let tick = StoredValue::new(0u32);
        let animate = move || {
            tick.update_value(|t| *t = t.wrapping_add(1));
            let progress = ping_pong(tick.get_value(), MORPH_STEPS, HOLD_STEPS);
            set_frame.set(morph(MONOGRAM, INITIALS, progress));
        };
        match set_interval_with_handle(animate, Duration::from_millis(FRAME_MS)) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't start banner animation: {e:?}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (owner, tagline, set_frame);

    view! {
        <pre class="font-mono text-sm leading-tight text-gray-500 inline-block" aria-hidden="true">
            {frame}
        </pre>
    }
}
