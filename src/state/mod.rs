//! State Management
//!
//! Global dashboard state and the snapshot poll loop.

pub mod global;
pub mod poller;

pub use global::{provide_dashboard_state, DashboardState};
pub use poller::start_polling;
