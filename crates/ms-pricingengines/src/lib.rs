//! # ms-pricingengines
//!
//! Closed-form pricing.
//!
//! ## Contents
//!
//! - [`black_scholes`] — Black-Scholes price and Greeks for European options
//! - [`AnalyticEuropeanEngine`] — prices an [`OptionContract`](ms_instruments::OptionContract)
//!   from spot, rate and volatility
//! - [`bond_functions`] — Macaulay duration and yield to maturity

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod analytic_european_engine;
pub mod black_scholes;
pub mod bond_functions;

pub use analytic_european_engine::AnalyticEuropeanEngine;
pub use black_scholes::{
    black_scholes_delta, black_scholes_gamma, black_scholes_price, black_scholes_rho,
    black_scholes_theta, black_scholes_vega, put_call_parity_gap, BlackScholes,
    BlackScholesInputs, Convention, Greeks,
};
pub use bond_functions::{
    bond_macaulay_duration, bond_macaulay_duration_from_yield, bond_yield_to_maturity,
    macaulay_duration, macaulay_duration_from_yield, yield_to_maturity,
};
