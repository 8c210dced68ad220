//! # kuma-cli
//!
//! Offline command-line tool for Uptime Kuma notification payloads.
//!
//! ## Features
//!
//! - **Decode**: read the server's double-encoded wire form and show the typed result
//! - **Encode**: turn a flat payload back into the wire form
//! - **Payload**: flatten a wire notification into the add/edit payload
//! - **Multiple output formats**: Pretty, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
