//! Medtriage - Symptom-to-Specialist Triage Engine
//!
//! This crate implements the resolution pipeline that turns a free-text
//! symptom conversation into a referral to the right medical specialist.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
