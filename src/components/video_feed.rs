//! Live Feed Panel
//!
//! MJPEG stream from the backend camera, rendered as a plain image source.
//! The browser keeps the multipart stream open on its own; no polling is
//! involved.

use leptos::*;

use crate::api;

#[component]
pub fn VideoFeed() -> impl IntoView {
    let stream_url = api::video_feed_url(&api::get_api_base());

    view! {
        <section class="chart-card video-panel">
            <h2>"Live Feed"</h2>
            <img src=stream_url alt="Live camera feed" />
        </section>
    }
}
