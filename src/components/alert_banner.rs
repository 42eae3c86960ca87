//! Alert Banner
//!
//! Over-threshold warning strip with the audible cue. The banner lists the
//! alerting zones in display order; the sound plays only when the alerting
//! set actually changes, so a reordered list stays silent.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use crate::render::{self, alerts::AlertTracker};
use crate::state::global::DashboardState;

#[component]
pub fn AlertBanner() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let audio_ref = create_node_ref::<html::Audio>();

    // The only cross-render state: the previously seen alert set
    let tracker = Rc::new(RefCell::new(AlertTracker::new()));

    create_effect(move |_| {
        let alerts = state
            .snapshot
            .get()
            .map(|snapshot| snapshot.alerts)
            .unwrap_or_default();
        if tracker.borrow_mut().observe(&alerts) {
            if let Some(audio) = audio_ref.get() {
                play_alert(&audio);
            }
        }
    });

    view! {
        <div class=move || {
            let quiet = state
                .snapshot
                .get()
                .map(|snapshot| snapshot.alerts.is_empty())
                .unwrap_or(true);
            if quiet { "alert-banner hidden" } else { "alert-banner" }
        }>
            <strong>"⚠ Over-crowding detected: "</strong>
            <span class="alert-zones">
                {move || {
                    let alerts = state
                        .snapshot
                        .get()
                        .map(|snapshot| snapshot.alerts)
                        .unwrap_or_default();
                    render::alert_line(&alerts)
                }}
            </span>
        </div>
        <audio node_ref=audio_ref src="/alert.wav" preload="auto"></audio>
    }
}

/// Restart and play the alert cue. Browsers may refuse until the user has
/// interacted with the page; that refusal is logged, not surfaced.
fn play_alert(audio: &web_sys::HtmlAudioElement) {
    audio.set_current_time(0.0);
    let promise: js_sys::Promise = match audio.play() {
        Ok(promise) => promise,
        Err(_) => return,
    };
    spawn_local(async move {
        if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
            web_sys::console::warn_1(&"Alert sound blocked by autoplay policy".into());
        }
    });
}
