//! Rate endpoint payloads and secondary-rate derivation.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use sarraf_shared::RateTable;
use serde::Deserialize;

use crate::error::FeedError;

/// The response shape both endpoints share: a JSON object with a `rates`
/// map of currency code to quote. Every other field is ignored.
#[derive(Debug, Deserialize)]
pub struct RatesPayload {
    /// Currency code -> rate relative to the endpoint's base.
    pub rates: BTreeMap<String, Decimal>,
}

/// Parses an endpoint body into a rate table.
///
/// # Errors
///
/// Returns [`FeedError::MalformedResponse`] if the body is not the
/// expected shape or the `rates` map is empty.
pub fn parse_payload(body: &str) -> Result<RateTable, FeedError> {
    let payload: RatesPayload =
        serde_json::from_str(body).map_err(|e| FeedError::MalformedResponse(e.to_string()))?;

    if payload.rates.is_empty() {
        return Err(FeedError::MalformedResponse("empty rates map".to_string()));
    }

    Ok(payload.rates.into_iter().collect())
}

/// Derives a MAD-based table from a USD-quoted one.
///
/// Every USD-relative rate is divided by the payload's USD->MAD rate
/// (`mad_based[c] = usd_rates[c] / usd_rates["MAD"]`), and MAD itself is
/// pinned to exactly 1.
///
/// # Errors
///
/// Returns [`FeedError::MissingAnchor`] if the table has no positive MAD
/// entry to divide by.
pub fn derive_mad_rates(usd_rates: &RateTable) -> Result<RateTable, FeedError> {
    let anchor = usd_rates
        .get("MAD")
        .filter(|rate| *rate > Decimal::ZERO)
        .ok_or(FeedError::MissingAnchor)?;

    let mut derived: RateTable = usd_rates
        .iter()
        .filter(|(code, _)| *code != "MAD")
        .map(|(code, rate)| (code.to_string(), rate / anchor))
        .collect();
    derived.insert("MAD", Decimal::ONE);

    Ok(derived)
}
