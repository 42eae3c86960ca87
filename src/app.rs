//! App Root Component
//!
//! Main application component with routing, global state, and the poll
//! loop's lifetime.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::Dashboard;
use crate::state::global::{provide_dashboard_state, DashboardState};
use crate::state::poller::start_polling;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_dashboard_state();

    // The poll loop lives exactly as long as the app
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let poll = start_polling(state.clone());
    on_cleanup(move || poll.cancel());

    view! {
        <Router>
            <div class="app">
                <header class="app-header">
                    <h1>"CrowdWatch"</h1>
                    <p>"Real-time crowd analytics"</p>
                </header>

                <main class="app-main">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
                <Toast />
            </div>
        </Router>
    }
}

/// Footer showing poll health and the last update time
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <footer class="app-footer">
            <div>
                {move || {
                    if state.connected.get() {
                        view! {
                            <span class="status online">
                                <span class="status-dot"></span>
                                " Live"
                            </span>
                        }
                        .into_view()
                    } else {
                        view! {
                            <span class="status offline">
                                <span class="status-dot"></span>
                                " Offline"
                            </span>
                        }
                        .into_view()
                    }
                }}
            </div>
            <div class="last-update">
                {move || {
                    state
                        .last_update
                        .get()
                        .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                        .map(|dt| format!("Last update: {}", dt.format("%H:%M:%S")))
                        .unwrap_or_else(|| "Waiting for data".to_string())
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <A href="/">"Go to Dashboard"</A>
        </div>
    }
}
