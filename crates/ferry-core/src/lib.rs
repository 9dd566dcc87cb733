//! # ferry-core
//!
//! Core library for ferry: process configuration, the sidecar metadata
//! record that makes checkins possible, and the text edit pipeline behind
//! the fused update command.

pub mod config;
pub mod edit;
pub mod error;
pub mod sidecar;

pub use config::Config;
pub use edit::{EditPlan, Replacement};
pub use error::{Error, Result};
pub use sidecar::Sidecar;
