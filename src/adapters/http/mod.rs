//! HTTP adapters - Axum delivery surface.

pub mod triage;
