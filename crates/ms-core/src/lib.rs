//! # ms-core
//!
//! Core types, error definitions, and settings for moonstock.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace: numeric type aliases, the error enum with its
//! `require!` macro, and the global [`Settings`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `require!` macro.
pub mod errors;

/// Global library settings (day-count basis).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A discount factor in [0, 1].
pub type DiscountFactor = Real;

/// A price or value.
pub type Price = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedDaysPerYear, Settings, DEFAULT_DAYS_PER_YEAR};
