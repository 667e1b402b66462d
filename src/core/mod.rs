//! Core domain logic for archcheck
//!
//! This module contains the execution contract and its outcomes. Rules and
//! reporting sinks are reached through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (TestGroup, Description, Markers, Outcome, ClassModel)
//! - `services/` - Executions and the runner
//! - `ports/` - Trait definitions for rules and reporting sinks

pub mod models;
pub mod ports;
pub mod services;
