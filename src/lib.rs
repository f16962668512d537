//! Crow's Nest CRM API Library
//!
//! Backend for the Crow's Nest email copilot: tenant-scoped dashboard
//! aggregation over leads, deals, and tasks, plus the prompt surface
//! the copilot is driven with.

pub mod api;
pub mod assistant;
pub mod auth;
pub mod dashboard;
pub mod domain;
pub mod infrastructure;
