//! Risk & compliance scoring core for a vocational-training records tool.
//!
//! The crate codifies the hazard-mitigation equipment and mandatory
//! certification catalogue, infers obligations from site facts, derives
//! lifecycle statuses from dates, aggregates a conformity percentage, and
//! applies reviewed advisory suggestion batches. Persistence, rendering, and
//! UI live in the surrounding services.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
