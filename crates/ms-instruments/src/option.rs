//! Quoted option contract record.

use crate::option_type::OptionType;
use ms_core::{Price, Real};
use std::fmt;

/// A listed option as quoted by a venue.
///
/// A passive value: strike, days to expiry, top of book, volume and the
/// day's change. Pricing happens in an engine, see
/// `ms_pricingengines::AnalyticEuropeanEngine`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    /// Display name of the contract.
    pub name: String,
    /// Strike price.
    pub strike_price: Price,
    /// Time to expiry in whole days.
    pub time_to_expiry: u32,
    /// Best bid.
    pub bid: Price,
    /// Best ask.
    pub ask: Price,
    /// Traded volume.
    pub volume: u64,
    /// Call or put.
    pub option_type: OptionType,
    /// Absolute price change, if quoted.
    pub change: Option<Real>,
    /// Price change in percent, if quoted.
    pub change_percent: Option<Real>,
}

impl OptionContract {
    /// Name given to contracts built without one.
    pub const DEFAULT_NAME: &'static str = "option";

    /// Create a call named [`DEFAULT_NAME`](Self::DEFAULT_NAME) with no
    /// change quoted.
    pub fn new(
        strike_price: Price,
        time_to_expiry: u32,
        bid: Price,
        ask: Price,
        volume: u64,
    ) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            strike_price,
            time_to_expiry,
            bid,
            ask,
            volume,
            option_type: OptionType::Call,
            change: None,
            change_percent: None,
        }
    }

    /// Set the option type.
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the quoted change, absolute and in percent.
    pub fn with_change(mut self, change: Real, change_percent: Real) -> Self {
        self.change = Some(change);
        self.change_percent = Some(change_percent);
        self
    }
}

struct Quoted(Option<Real>);

impl fmt::Display for Quoted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for OptionContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {} {} {}",
            self.name,
            self.strike_price,
            self.time_to_expiry,
            self.bid,
            self.ask,
            self.volume,
            Quoted(self.change),
            Quoted(self.change_percent),
            self.option_type,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opt = OptionContract::new(100.0, 30, 2.5, 2.7, 120);
        assert_eq!(opt.name, "option");
        assert_eq!(opt.option_type, OptionType::Call);
        assert_eq!(opt.change, None);
        assert_eq!(opt.change_percent, None);
    }

    #[test]
    fn display_renders_fields_in_order() {
        let opt = OptionContract::new(100.0, 30, 2.5, 2.75, 120)
            .with_name("AAPL240621C100")
            .with_option_type(OptionType::Put)
            .with_change(-0.25, -8.5);
        assert_eq!(opt.to_string(), "AAPL240621C100 100 30 2.5 2.75 120 -0.25 -8.5 put");
    }

    #[test]
    fn display_marks_missing_change() {
        let opt = OptionContract::new(95.5, 7, 1.0, 1.25, 0);
        assert_eq!(opt.to_string(), "option 95.5 7 1 1.25 0 - - call");
    }

    #[test]
    fn structural_equality() {
        let a = OptionContract::new(100.0, 30, 2.5, 2.7, 120);
        let b = OptionContract::new(100.0, 30, 2.5, 2.7, 120);
        assert_eq!(a, b);
        assert_ne!(a, b.clone().with_option_type(OptionType::Put));
        assert_ne!(a, b.with_change(0.1, 4.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let opt = OptionContract::new(100.0, 30, 2.5, 2.7, 120).with_option_type(OptionType::Put);
        let json = serde_json::to_string(&opt).unwrap();
        assert!(json.contains("\"option_type\":\"put\""));
        let back: OptionContract = serde_json::from_str(&json).unwrap();
        assert_eq!(back, opt);
    }
}
