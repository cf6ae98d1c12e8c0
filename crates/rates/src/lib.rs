//! Exchange rate acquisition for Sarraf.
//!
//! Produces a best-effort MAD-based rate table through a deterministic
//! source chain: primary MAD-quoting API, USD-quoting secondary API with
//! derivation, persisted cache, and finally a small static table. The
//! chain never fails the caller; the quote's `source` tag and `degraded`
//! flag communicate freshness instead.
//!
//! The network and persistence capabilities are injected ([`FetchText`],
//! [`KvStore`]) so hosts control transport and storage.

pub mod client;
pub mod error;
pub mod service;
pub mod source;
pub mod store;

pub use client::{FetchText, HttpClient};
pub use error::FeedError;
pub use service::{CachedRates, RateQuote, RateService, RateSource, fallback_table};
pub use store::{JsonFileStore, KvStore, MemoryStore, StoreError};
