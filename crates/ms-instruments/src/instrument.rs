//! Pricing results and the `PricingEngine` seam.
//!
//! Records in this crate carry no behaviour of their own; an engine takes a
//! record by reference and computes a [`PricingResults`] on demand.

use ms_core::{errors::Result, Real};
use std::collections::BTreeMap;

/// Results of pricing an instrument.
///
/// Contains the NPV and additional named results (e.g. "delta", "gamma").
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingResults {
    /// Net present value.
    pub npv: Real,
    /// Additional named results, ordered by name.
    pub additional_results: BTreeMap<String, Real>,
}

impl PricingResults {
    /// Create pricing results with just an NPV.
    pub fn from_npv(npv: Real) -> Self {
        Self {
            npv,
            additional_results: BTreeMap::new(),
        }
    }

    /// Add a named result.
    pub fn with_result(mut self, key: impl Into<String>, value: Real) -> Self {
        self.additional_results.insert(key.into(), value);
        self
    }

    /// Look up a named result.
    pub fn result(&self, key: &str) -> Option<Real> {
        self.additional_results.get(key).copied()
    }
}

/// A pricing engine computes [`PricingResults`] for one kind of record.
pub trait PricingEngine<Args>: std::fmt::Debug + Send + Sync {
    /// Price the instrument described by `args`.
    fn calculate(&self, args: &Args) -> Result<PricingResults>;
}
