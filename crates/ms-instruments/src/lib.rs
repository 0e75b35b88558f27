//! # ms-instruments
//!
//! Financial instruments as plain value records: option contracts, stocks
//! and bonds, plus the [`PricingEngine`] seam engines implement.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bond;
pub mod instrument;
pub mod option;
pub mod option_type;
pub mod stock;

pub use bond::Bond;
pub use instrument::{PricingEngine, PricingResults};
pub use option::OptionContract;
pub use option_type::OptionType;
pub use stock::Stock;
