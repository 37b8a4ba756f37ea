//! Core logic for the homework review notifier.
//!
//! This crate is framework-agnostic. The homework-status HTTP API and the chat
//! messenger live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod dedup;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod ports;
pub mod response;
pub mod status;

pub use errors::{Error, Result};
