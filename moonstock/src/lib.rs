//! # moonstock
//!
//! Closed-form financial formulas: Black-Scholes pricing and Greeks, bond
//! duration and yield, and the CAPM.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on it rather than the individual `ms-*`
//! crates.
//!
//! ## Quick start
//!
//! ```rust
//! use moonstock::instruments::OptionType;
//! use moonstock::pricingengines::{BlackScholes, BlackScholesInputs, Convention};
//!
//! let inputs = BlackScholesInputs::new(100.0, 100.0, 0.05, 0.2, 1.0)?;
//! let textbook = BlackScholes::with_convention(inputs, Convention::Textbook);
//! assert!((textbook.price(OptionType::Call) - 10.4506).abs() < 1e-4);
//!
//! let tag: OptionType = "put".parse()?;
//! let greeks = BlackScholes::new(inputs).greeks(tag);
//! assert!(greeks.gamma < 0.0);
//! # Ok::<(), moonstock::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, errors and settings.
pub use ms_core as core;

/// Standard normal distribution.
pub use ms_math as math;

/// Option, stock and bond records.
pub use ms_instruments as instruments;

/// Equity return models (CAPM).
pub use ms_models as models;

/// Black-Scholes formulas, the analytic engine and bond functions.
pub use ms_pricingengines as pricingengines;
