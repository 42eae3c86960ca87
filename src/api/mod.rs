//! Backend API
//!
//! HTTP client for the crowd-analytics endpoints.

pub mod client;

pub use client::*;
