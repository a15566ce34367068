//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the portable storage layer:
//! - Logging and tracing infrastructure
//! - Configuration management and backend injection
//!
//! ## Overview
//!
//! This crate decides, once at startup, which storage backend and which root
//! provider the facade talks to, and configures the `tracing` pipeline the
//! backend adapters log through.

pub mod config;
pub mod error;
pub mod logging;

pub use error::{Error, Result};
