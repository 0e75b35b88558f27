//! # ms-models
//!
//! Equity return models.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod capm;

pub use capm::Capm;
