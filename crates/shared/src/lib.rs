//! Shared types, errors, and configuration for Leasebook.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for units and financial records
//! - Currency codes for display
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
