//! CrowdWatch Dashboard
//!
//! Real-time crowd analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - 1 Hz polling of the backend snapshot endpoint
//! - Per-zone occupancy boxes and two live charts
//! - Over-threshold alert banner with a sound cue
//! - Admin actions: threshold, camera source, user list, report export
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the crowd-analytics backend via HTTP only; every
//! polled snapshot fully replaces the rendered state.

use leptos::*;

mod api;
mod app;
mod charts;
mod components;
mod pages;
mod render;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
