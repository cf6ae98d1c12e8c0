//! The tiered rate acquisition service.

use chrono::Utc;
use rust_decimal::Decimal;
use sarraf_shared::{FeedConfig, RateTable};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::FetchText;
use crate::error::FeedError;
use crate::source::{derive_mad_rates, parse_payload};
use crate::store::KvStore;

/// Store key holding the serialized [`CachedRates`] record.
pub const CACHE_KEY: &str = "cached_exchange_rates";

/// Store key holding the raw fetch timestamp in milliseconds.
///
/// Redundant with the record's own timestamp, but hosts read this key
/// directly for "last updated" display without decoding the full record.
pub const CACHE_TIMESTAMP_KEY: &str = "cache_timestamp";

/// Which tier ultimately produced a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// Live fetch from the MAD-quoting endpoint.
    Primary,
    /// Live fetch from the USD-quoting endpoint, rebased onto MAD.
    Secondary,
    /// Persisted rates from an earlier successful fetch.
    Cache,
    /// The built-in static table; the network and cache both failed.
    Fallback,
}

/// The persisted cache record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedRates {
    /// The cached MAD-based table.
    pub rates: RateTable,
    /// When the table was fetched, in Unix milliseconds.
    pub timestamp: i64,
}

/// A rate table plus provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RateQuote {
    /// MAD-based rates.
    pub rates: RateTable,
    /// When the rates were fetched, in Unix milliseconds. For cached
    /// quotes this is the original fetch time, not the read time.
    pub timestamp_ms: i64,
    /// The tier that produced this quote.
    pub source: RateSource,
    /// True when the quote is the static fallback: nothing fresher was
    /// available and callers should surface an offline indicator.
    pub degraded: bool,
}

/// The static last-resort table (approximate rates).
#[must_use]
pub fn fallback_table() -> RateTable {
    RateTable::from([
        ("MAD", Decimal::ONE),
        ("USD", Decimal::new(10, 2)),
        ("EUR", Decimal::new(92, 3)),
        ("GBP", Decimal::new(79, 3)),
        ("CAD", Decimal::new(135, 3)),
    ])
}

/// Best-effort MAD-based rate acquisition.
///
/// One call walks primary -> secondary -> cache -> static fallback and
/// stops at the first tier that yields a table. The walk never fails:
/// an interactive exchange tool must always render *something*, so
/// network and parse errors only move the walk along, and the final tier
/// is infallible.
pub struct RateService<F, S> {
    fetch: F,
    store: S,
    config: FeedConfig,
}

impl<F: FetchText, S: KvStore> RateService<F, S> {
    /// Creates a service over the given capabilities.
    pub fn new(fetch: F, store: S, config: FeedConfig) -> Self {
        Self {
            fetch,
            store,
            config,
        }
    }

    /// Acquires a rate table, trying each source tier in order.
    ///
    /// Only the two live tiers write the cache; the cache and fallback
    /// tiers are read-only.
    pub async fn fetch_rates(&self) -> RateQuote {
        match self.try_primary().await {
            Ok(quote) => return quote,
            Err(e) => warn!(error = %e, "Primary rate endpoint failed, trying secondary"),
        }

        match self.try_secondary().await {
            Ok(quote) => return quote,
            Err(e) => warn!(error = %e, "Secondary rate endpoint failed, trying cache"),
        }

        if let Some(quote) = self.try_cache() {
            debug!(timestamp_ms = quote.timestamp_ms, "Serving cached rates");
            return quote;
        }

        warn!("All rate sources failed, serving static fallback table");
        RateQuote {
            rates: fallback_table(),
            timestamp_ms: Utc::now().timestamp_millis(),
            source: RateSource::Fallback,
            degraded: true,
        }
    }

    /// When the cache was last refreshed, in Unix milliseconds.
    #[must_use]
    pub fn last_update_timestamp(&self) -> Option<i64> {
        let raw = self.store.get(CACHE_TIMESTAMP_KEY).ok()??;
        raw.parse().ok()
    }

    async fn try_primary(&self) -> Result<RateQuote, FeedError> {
        let url = format!("{}/MAD", self.config.primary_url);
        let body = self.fetch.get_text(&url).await?;
        let rates = parse_payload(&body)?;

        let timestamp_ms = Utc::now().timestamp_millis();
        self.write_through(&rates, timestamp_ms);
        debug!(currencies = rates.len(), "Fetched MAD rates from primary");

        Ok(RateQuote {
            rates,
            timestamp_ms,
            source: RateSource::Primary,
            degraded: false,
        })
    }

    async fn try_secondary(&self) -> Result<RateQuote, FeedError> {
        let url = format!("{}/USD", self.config.secondary_url);
        let body = self.fetch.get_text(&url).await?;
        let usd_rates = parse_payload(&body)?;
        let rates = derive_mad_rates(&usd_rates)?;

        let timestamp_ms = Utc::now().timestamp_millis();
        self.write_through(&rates, timestamp_ms);
        debug!(currencies = rates.len(), "Derived MAD rates from secondary");

        Ok(RateQuote {
            rates,
            timestamp_ms,
            source: RateSource::Secondary,
            degraded: false,
        })
    }

    fn try_cache(&self) -> Option<RateQuote> {
        let raw = match self.store.get(CACHE_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                warn!(error = %e, "Cache read failed");
                return None;
            }
        };

        let cached: CachedRates = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                warn!(error = %e, "Discarding undecodable cache record");
                return None;
            }
        };

        let age_ms = Utc::now().timestamp_millis() - cached.timestamp;
        if age_ms >= self.ttl_ms() {
            debug!(age_ms, "Cached rates are stale");
            return None;
        }

        Some(RateQuote {
            rates: cached.rates,
            timestamp_ms: cached.timestamp,
            source: RateSource::Cache,
            degraded: false,
        })
    }

    /// Persists a freshly fetched table. A storage problem must not fail
    /// a successful fetch, so errors are logged and swallowed.
    fn write_through(&self, rates: &RateTable, timestamp_ms: i64) {
        let record = CachedRates {
            rates: rates.clone(),
            timestamp: timestamp_ms,
        };
        match serde_json::to_string(&record) {
            Ok(json) => {
                if let Err(e) = self.store.set(CACHE_KEY, &json) {
                    warn!(error = %e, "Failed to cache exchange rates");
                }
            }
            Err(e) => warn!(error = %e, "Failed to encode cache record"),
        }
        if let Err(e) = self
            .store
            .set(CACHE_TIMESTAMP_KEY, &timestamp_ms.to_string())
        {
            warn!(error = %e, "Failed to record cache timestamp");
        }
    }

    fn ttl_ms(&self) -> i64 {
        i64::try_from(self.config.cache_ttl_secs)
            .unwrap_or(i64::MAX)
            .saturating_mul(1000)
    }
}
