//! Equity quote record.

use ms_core::{Price, Real};
use std::fmt;

/// A stock quote snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stock {
    /// Ticker or display name.
    pub name: String,
    /// Last price.
    pub price: Price,
    /// Absolute change on the day.
    pub change: Real,
    /// Change on the day in percent.
    pub change_percent: Real,
    /// Traded volume.
    pub volume: u64,
    /// Market capitalisation.
    pub market_cap: Real,
    /// Price / earnings ratio.
    pub pe_ratio: Real,
    /// Earnings per share.
    pub eps: Real,
    /// Dividend yield as a decimal.
    pub dividend_yield: Real,
}

impl Stock {
    /// Create a quote with no change on the day and zero fundamentals.
    pub fn new(name: impl Into<String>, price: Price, volume: u64) -> Self {
        Self {
            name: name.into(),
            price,
            change: 0.0,
            change_percent: 0.0,
            volume,
            market_cap: 0.0,
            pe_ratio: 0.0,
            eps: 0.0,
            dividend_yield: 0.0,
        }
    }

    /// Set the change on the day, absolute and in percent.
    pub fn with_change(mut self, change: Real, change_percent: Real) -> Self {
        self.change = change;
        self.change_percent = change_percent;
        self
    }

    /// Set market capitalisation, P/E, EPS and dividend yield.
    pub fn with_fundamentals(
        mut self,
        market_cap: Real,
        pe_ratio: Real,
        eps: Real,
        dividend_yield: Real,
    ) -> Self {
        self.market_cap = market_cap;
        self.pe_ratio = pe_ratio;
        self.eps = eps;
        self.dividend_yield = dividend_yield;
        self
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.name,
            self.price,
            self.change,
            self.change_percent,
            self.volume,
            self.market_cap,
            self.pe_ratio,
            self.eps,
            self.dividend_yield,
        )
    }
}
