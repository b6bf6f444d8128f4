//! Inspection tooling for elfscope.
//!
//! This crate provides:
//! - Configuration: output format and log destination from the environment
//! - Reports: header, section, symbol and relocation views with an input digest
//! - Rendering: stable plain-text tables, or JSON through serde
//! - Structured logging: JSONL records for every pipeline stage of a run
//! - The `elfscope` command-line entry point

#![forbid(unsafe_code)]

pub mod config;
pub mod render;
pub mod report;
pub mod structured_log;

pub use config::{OutputFormat, RunConfig};
pub use report::{Actions, HarnessError, InspectReport, RunOutput, SelfTestReport};
