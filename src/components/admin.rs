//! Admin Panel
//!
//! One-shot admin commands: alert threshold, camera source, user list,
//! report export, and the backend URL. Each action sends a single request
//! and surfaces the outcome as a toast. There is no retry and no guard
//! against overlapping invocations; the backend serializes writes.

use leptos::*;

use crate::api::{self, ReportFormat};
use crate::state::global::{DashboardState, UserInfo};

/// Threshold applied when the input is empty or not a number
pub const DEFAULT_THRESHOLD: u32 = 20;
/// Camera source sent when the input is empty (default device index)
pub const DEFAULT_CAMERA_SOURCE: &str = "0";

/// Parse the threshold input, falling back to the default on junk
pub fn parse_threshold(input: &str) -> u32 {
    input.trim().parse().unwrap_or(DEFAULT_THRESHOLD)
}

/// Trim the camera source input, substituting the default device when empty
pub fn normalize_camera_source(input: &str) -> String {
    let source = input.trim();
    if source.is_empty() {
        DEFAULT_CAMERA_SOURCE.to_string()
    } else {
        source.to_string()
    }
}

/// `name (role)` line for the users panel
pub fn user_line(user: &UserInfo) -> String {
    format!("{} ({})", user.username, user.role)
}

#[component]
pub fn AdminPanel() -> impl IntoView {
    view! {
        <section class="admin-card">
            <h2>"Admin Controls"</h2>
            <div class="admin-grid">
                <ThresholdControl />
                <CameraControl />
                <ExportControls />
                <BackendControl />
            </div>
            <UsersPanel />
        </section>
    }
}

#[component]
fn ThresholdControl() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let (input, set_input) = create_signal(String::new());

    let on_apply = move |_| {
        let threshold = parse_threshold(&input.get());
        let state = state.clone();
        spawn_local(async move {
            match api::set_threshold(threshold).await {
                Ok(()) => state.show_success(&format!("Threshold set to {}", threshold)),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="admin-field">
            <label>"Alert threshold"</label>
            <div class="field-row">
                <input
                    type="number"
                    min="0"
                    placeholder="20"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=on_apply>"Apply"</button>
            </div>
        </div>
    }
}

#[component]
fn CameraControl() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let (input, set_input) = create_signal(String::new());

    let on_switch = move |_| {
        let source = normalize_camera_source(&input.get());
        let state = state.clone();
        spawn_local(async move {
            match api::change_camera(&source).await {
                Ok(()) => state.show_success(&format!("Camera source set to {}", source)),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="admin-field">
            <label>"Camera source"</label>
            <div class="field-row">
                <input
                    type="text"
                    placeholder="0 for default device, or a stream URL"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=on_switch>"Switch"</button>
            </div>
        </div>
    }
}

#[component]
fn ExportControls() -> impl IntoView {
    view! {
        <div class="admin-field">
            <label>"Reports"</label>
            <div class="field-row">
                <ExportButton format=ReportFormat::Csv />
                <ExportButton format=ReportFormat::Pdf />
            </div>
        </div>
    }
}

#[component]
fn ExportButton(format: ReportFormat) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let on_export = move |_| {
        let state = state.clone();
        spawn_local(async move {
            match api::request_export(format).await {
                Ok(Some(filename)) => {
                    navigate_to(&api::download_url(&api::get_api_base(), &filename));
                }
                Ok(None) => state.show_info("No data to export"),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <button class="btn btn-secondary" on:click=on_export>
            {format!("Export {}", format.label())}
        </button>
    }
}

/// Point the page at a download URL; the browser handles the attachment
fn navigate_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

#[component]
fn BackendControl() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let (url, set_url) = create_signal(api::get_api_base());

    let on_save = move |_| {
        api::set_api_base(&url.get());
        state.show_success("Backend URL saved");
    };

    view! {
        <div class="admin-field">
            <label>"Backend URL"</label>
            <div class="field-row">
                <input
                    type="text"
                    prop:value=move || url.get()
                    on:input=move |ev| set_url.set(event_target_value(&ev))
                />
                <button class="btn btn-secondary" on:click=on_save>"Save"</button>
            </div>
        </div>
    }
}

#[component]
fn UsersPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let state_fetch = state.clone();
    let on_fetch = move |_| {
        let state = state_fetch.clone();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => state.users.set(Some(users)),
                // Backend refusals ("Admin access required") pass through
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="users-panel">
            <button class="btn btn-secondary" on:click=on_fetch>"View Users"</button>
            {move || {
                state.users.get().map(|users| {
                    if users.is_empty() {
                        view! { <p class="users-empty">"No users yet"</p> }.into_view()
                    } else {
                        view! {
                            <ul class="users-list">
                                {users
                                    .iter()
                                    .map(|user| view! { <li>{user_line(user)}</li> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_falls_back_on_junk() {
        assert_eq!(parse_threshold(""), 20);
        assert_eq!(parse_threshold("abc"), 20);
        assert_eq!(parse_threshold("-2"), 20);
        assert_eq!(parse_threshold(" 35 "), 35);
        assert_eq!(parse_threshold("0"), 0);
    }

    #[test]
    fn test_camera_source_trims_and_defaults() {
        assert_eq!(normalize_camera_source(""), "0");
        assert_eq!(normalize_camera_source("   "), "0");
        assert_eq!(normalize_camera_source(" cam2 "), "cam2");
        assert_eq!(normalize_camera_source("rtsp://cam.local/feed"), "rtsp://cam.local/feed");
    }

    #[test]
    fn test_user_lines_show_name_and_role() {
        let user = UserInfo {
            username: "amit".to_string(),
            role: "admin".to_string(),
            created_at: None,
        };
        assert_eq!(user_line(&user), "amit (admin)");
    }
}
