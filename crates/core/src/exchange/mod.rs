//! Rate-table conversion routed through MAD.
//!
//! Pure functions over a [`sarraf_shared::RateTable`]; acquiring the table
//! is the `sarraf-rates` crate's job.

mod convert;
#[cfg(test)]
mod props;

pub use convert::convert_with_rates;
