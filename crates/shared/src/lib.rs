//! Shared types and configuration for Sarraf.
//!
//! This crate provides common types used across all other crates:
//! - Currency unit enums for the offline and international domains
//! - The MAD-based rate table type
//! - Configuration management

pub mod config;
pub mod types;

pub use config::{AppConfig, FeedConfig};
pub use types::{Currency, OfflineUnit, RateTable};
