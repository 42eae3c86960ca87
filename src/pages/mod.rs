//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;

pub use dashboard::Dashboard;
