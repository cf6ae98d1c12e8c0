//! Conversion between historical Moroccan units.
//!
//! All rates are fixed and known at compile time; nothing here touches the
//! network. The dirham is the base unit: conversions go source -> dirham ->
//! target.

mod convert;
mod error;
#[cfg(test)]
mod props;

pub use convert::convert;
pub use error::OfflineError;
