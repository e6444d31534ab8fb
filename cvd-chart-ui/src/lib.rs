//! Shared Dioxus components and Plotly.js bridge for CVD dashboard apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Plotly.js rendering via `js_sys::eval()`
//! - `hover`: hover-event plumbing from Plotly charts back into Signals
//! - `state`: reactive state bundles built on Dioxus Signals
//! - `components`: reusable RSX components (selectors, toggles, containers)

pub mod components;
pub mod hover;
pub mod js_bridge;
pub mod state;
