//! Bond duration and yield functions.
//!
//! Each function takes the four bond scalars directly; the `bond_*`
//! variants take a [`Bond`] record instead.
//!
//! ```text
//! n          = ⌈maturity / frequency⌉
//! duration   = n·c·(1 + rate) / (n·c·rate)
//!
//! a          = 1 − (1 + rate)^(−maturity / frequency)
//! interest   = rate · maturity · c / a
//! principal  = maturity · c / a
//! ```
//!
//! where `c` is the coupon payment amount. `macaulay_duration_from_yield`
//! is `principal / interest` and `yield_to_maturity` its reciprocal.

use ms_core::{errors::Result, require, Price, Rate, Real, Time};
use ms_instruments::Bond;

fn check_inputs(coupon_rate: Rate, maturity: Time, frequency: u32, amount: Price) -> Result<()> {
    require!(frequency > 0, "payment frequency must be positive");
    require!(
        coupon_rate.is_finite() && coupon_rate > -1.0 && coupon_rate != 0.0,
        "coupon rate must be finite, non-zero and above -1, got {coupon_rate}"
    );
    require!(
        maturity.is_finite() && maturity > 0.0,
        "maturity must be positive, got {maturity}"
    );
    require!(
        amount.is_finite() && amount != 0.0,
        "coupon payment amount must be finite and non-zero, got {amount}"
    );
    Ok(())
}

/// Macaulay duration from the coupon schedule.
pub fn macaulay_duration(
    coupon_rate: Rate,
    maturity: Time,
    frequency: u32,
    coupon_payment_amount: Price,
) -> Result<Real> {
    check_inputs(coupon_rate, maturity, frequency, coupon_payment_amount)?;
    let num_coupons = (maturity / Real::from(frequency)).ceil();
    let total_coupon_amount = num_coupons * coupon_payment_amount;
    let total_interest = total_coupon_amount * coupon_rate;
    require!(
        total_interest != 0.0 && total_interest.is_finite(),
        "total interest {total_interest} for coupon rate {coupon_rate} is not a usable divisor"
    );
    let total_principal = total_coupon_amount + total_interest;
    Ok(total_principal / total_interest)
}

/// Annuity-discounted interest and principal totals.
fn annuity_totals(
    coupon_rate: Rate,
    maturity: Time,
    frequency: u32,
    coupon_payment_amount: Price,
) -> Result<(Real, Real)> {
    check_inputs(coupon_rate, maturity, frequency, coupon_payment_amount)?;
    let annuity = 1.0 - (1.0 + coupon_rate).powf(-maturity / Real::from(frequency));
    // A coupon rate below the precision of `1 + rate` leaves no annuity.
    require!(
        annuity != 0.0 && annuity.is_finite(),
        "annuity factor {annuity} for coupon rate {coupon_rate} is not a usable divisor"
    );
    let total_interest = (coupon_rate * maturity * coupon_payment_amount) / annuity;
    let total_principal = (coupon_payment_amount * maturity) / annuity;
    Ok((total_interest, total_principal))
}

/// Macaulay duration from the coupon rate taken as the yield.
pub fn macaulay_duration_from_yield(
    coupon_rate: Rate,
    maturity: Time,
    frequency: u32,
    coupon_payment_amount: Price,
) -> Result<Real> {
    let (interest, principal) =
        annuity_totals(coupon_rate, maturity, frequency, coupon_payment_amount)?;
    Ok(principal / interest)
}

/// Yield to maturity.
pub fn yield_to_maturity(
    coupon_rate: Rate,
    maturity: Time,
    frequency: u32,
    coupon_payment_amount: Price,
) -> Result<Rate> {
    let (interest, principal) =
        annuity_totals(coupon_rate, maturity, frequency, coupon_payment_amount)?;
    Ok(interest / principal)
}

/// [`macaulay_duration`] of a bond record.
pub fn bond_macaulay_duration(bond: &Bond) -> Result<Real> {
    macaulay_duration(
        bond.coupon_rate,
        bond.maturity,
        bond.frequency,
        bond.coupon_payment_amount,
    )
}

/// [`macaulay_duration_from_yield`] of a bond record.
pub fn bond_macaulay_duration_from_yield(bond: &Bond) -> Result<Real> {
    macaulay_duration_from_yield(
        bond.coupon_rate,
        bond.maturity,
        bond.frequency,
        bond.coupon_payment_amount,
    )
}

/// [`yield_to_maturity`] of a bond record.
pub fn bond_yield_to_maturity(bond: &Bond) -> Result<Rate> {
    yield_to_maturity(
        bond.coupon_rate,
        bond.maturity,
        bond.frequency,
        bond.coupon_payment_amount,
    )
}
