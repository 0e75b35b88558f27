//! Coupon bond record.
//!
//! Duration and yield are computed by the free functions in
//! `ms_pricingengines::bond_functions`, which accept either the four
//! scalars or a `&Bond`.

use ms_core::{Price, Rate, Time};

/// A plain coupon bond.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bond {
    /// Coupon rate as a decimal.
    pub coupon_rate: Rate,
    /// Maturity in years.
    pub maturity: Time,
    /// Months between coupon payments.
    pub frequency: u32,
    /// Cash amount of each coupon payment.
    pub coupon_payment_amount: Price,
}

impl Bond {
    /// Create a bond.
    pub fn new(
        coupon_rate: Rate,
        maturity: Time,
        frequency: u32,
        coupon_payment_amount: Price,
    ) -> Self {
        Self {
            coupon_rate,
            maturity,
            frequency,
            coupon_payment_amount,
        }
    }
}
