use dioxus::prelude::*;

use crate::domain::models::PresencePhase;
use crate::shared::logging::log_presence_change;

/// Track the mount phase of an overlay that slides in and out.
///
/// The overlay stays mounted while `open` is true and for `duration_ms` after
/// it turns false, so the exit animation can play. Timers started by an
/// earlier transition are ignored once a newer transition happened.
pub fn use_presence(open: Signal<bool>, duration_ms: u32) -> Signal<PresencePhase> {
    let mut phase = use_signal(PresencePhase::default);
    let mut generation = use_signal(|| 0u64);

    use_effect(move || {
        let is_open = open();
        let current = *phase.peek();
        let next = current.on_visibility(is_open);
        if next == current {
            return;
        }

        log_presence_change(current, next);
        phase.set(next);

        let ticket = {
            let mut counter = generation.write();
            *counter += 1;
            *counter
        };

        spawn(async move {
            sleep_ms(duration_ms).await;

            if *generation.peek() != ticket {
                return;
            }

            let current = *phase.peek();
            let next = current.on_animation_end();
            if next != current {
                log_presence_change(current, next);
                phase.set(next);
            }
        });
    });

    phase
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(duration_ms: u32) {
    gloo_timers::future::TimeoutFuture::new(duration_ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(duration_ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(duration_ms))).await;
}
