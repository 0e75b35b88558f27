//! Black-Scholes price and Greeks for European options.
//!
//! All quantities share
//!
//! $$d_1 = \frac{\ln(S/K) + (r + \sigma^2/2)T}{\sigma\sqrt{T}}, \qquad d_2 = d_1 - \sigma\sqrt{T}$$
//!
//! Two sets of formulas are available, selected by [`Convention`]:
//!
//! - [`Convention::Reference`] (the default) discounts the spot leg of the
//!   price and delta by `e^{-rT}`, uses `N(±d1)` in theta and rho, and
//!   reports put gamma and vega as the negation of the call values. These
//!   are the numbers moonstock has always produced.
//! - [`Convention::Textbook`] is the canonical no-dividend
//!   Black-Scholes-Merton model, where gamma and vega do not depend on the
//!   option type.
//!
//! The free functions (`black_scholes_price`, `black_scholes_delta`, ...)
//! take `(S, K, r, σ, T, option_type)` and always use the reference
//! convention.

use ms_core::{errors::Result, require, DiscountFactor, Price, Rate, Real, Time, Volatility};
use ms_instruments::OptionType;
use ms_math::distributions::{normal_cdf, normal_pdf};

/// Which set of Black-Scholes formulas to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Convention {
    /// Spot leg discounted by `e^{-rT}`; put gamma and vega negated.
    #[default]
    Reference,
    /// Canonical Black-Scholes-Merton without dividends.
    Textbook,
}

/// Validated market and contract inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesInputs {
    spot: Price,
    strike: Price,
    risk_free_rate: Rate,
    volatility: Volatility,
    time_to_expiry: Time,
}

impl BlackScholesInputs {
    /// Validate and bundle the inputs.
    ///
    /// Fails with `InvalidArgument` unless spot, strike, volatility and
    /// time to expiry are finite and strictly positive and the rate is
    /// finite. Zero volatility or zero time would divide by zero in `d1`.
    pub fn new(
        spot: Price,
        strike: Price,
        risk_free_rate: Rate,
        volatility: Volatility,
        time_to_expiry: Time,
    ) -> Result<Self> {
        require!(spot.is_finite() && spot > 0.0, "spot must be positive, got {spot}");
        require!(
            strike.is_finite() && strike > 0.0,
            "strike must be positive, got {strike}"
        );
        require!(
            risk_free_rate.is_finite(),
            "risk-free rate must be finite, got {risk_free_rate}"
        );
        require!(
            volatility.is_finite() && volatility > 0.0,
            "volatility must be positive, got {volatility}"
        );
        require!(
            time_to_expiry.is_finite() && time_to_expiry > 0.0,
            "time to expiry must be positive, got {time_to_expiry}"
        );
        Ok(Self {
            spot,
            strike,
            risk_free_rate,
            volatility,
            time_to_expiry,
        })
    }

    /// Underlying price `S`.
    pub fn spot(&self) -> Price {
        self.spot
    }

    /// Strike `K`.
    pub fn strike(&self) -> Price {
        self.strike
    }

    /// Continuously compounded risk-free rate `r`.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Volatility `σ`.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Time to expiry `T` in years.
    pub fn time_to_expiry(&self) -> Time {
        self.time_to_expiry
    }
}

/// Price and the five Greeks computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// Fair value.
    pub price: Real,
    /// ∂V/∂S.
    pub delta: Real,
    /// ∂²V/∂S².
    pub gamma: Real,
    /// ∂V/∂σ, per unit of volatility.
    pub vega: Real,
    /// Time decay, per year.
    pub theta: Real,
    /// ∂V/∂r, per unit of rate.
    pub rho: Real,
}

/// Black-Scholes calculator for one set of inputs.
///
/// `d1`, `d2`, `√T` and the discount factor are computed once at
/// construction and shared by every Greek.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    inputs: BlackScholesInputs,
    convention: Convention,
    sqrt_t: Real,
    d1: Real,
    d2: Real,
    df: DiscountFactor,
}

impl BlackScholes {
    /// Calculator using [`Convention::Reference`].
    pub fn new(inputs: BlackScholesInputs) -> Self {
        Self::with_convention(inputs, Convention::Reference)
    }

    /// Calculator using the given convention.
    pub fn with_convention(inputs: BlackScholesInputs, convention: Convention) -> Self {
        let BlackScholesInputs {
            spot: s,
            strike: k,
            risk_free_rate: r,
            volatility: sigma,
            time_to_expiry: t,
        } = inputs;
        let sqrt_t = t.sqrt();
        let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
        let d2 = d1 - sigma * sqrt_t;
        Self {
            inputs,
            convention,
            sqrt_t,
            d1,
            d2,
            df: (-r * t).exp(),
        }
    }

    /// The inputs.
    pub fn inputs(&self) -> &BlackScholesInputs {
        &self.inputs
    }

    /// The convention in use.
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// `d1`.
    pub fn d1(&self) -> Real {
        self.d1
    }

    /// `d2 = d1 − σ√T`.
    pub fn d2(&self) -> Real {
        self.d2
    }

    /// `e^{-rT}`.
    pub fn discount_factor(&self) -> DiscountFactor {
        self.df
    }

    /// Fair value.
    pub fn price(&self, option_type: OptionType) -> Price {
        let (s, k, df) = (self.inputs.spot, self.inputs.strike, self.df);
        let (d1, d2) = (self.d1, self.d2);
        match (self.convention, option_type) {
            (Convention::Reference, OptionType::Call) => {
                s * df * normal_cdf(d1) - k * df * normal_cdf(d2)
            }
            (Convention::Reference, OptionType::Put) => {
                k * df * normal_cdf(-d2) - s * df * normal_cdf(-d1)
            }
            (Convention::Textbook, OptionType::Call) => {
                s * normal_cdf(d1) - k * df * normal_cdf(d2)
            }
            (Convention::Textbook, OptionType::Put) => {
                k * df * normal_cdf(-d2) - s * normal_cdf(-d1)
            }
        }
    }

    /// Sensitivity to the underlying price.
    pub fn delta(&self, option_type: OptionType) -> Real {
        match (self.convention, option_type) {
            (Convention::Reference, OptionType::Call) => self.df * normal_cdf(self.d1),
            (Convention::Reference, OptionType::Put) => -self.df * normal_cdf(-self.d1),
            (Convention::Textbook, OptionType::Call) => normal_cdf(self.d1),
            (Convention::Textbook, OptionType::Put) => normal_cdf(self.d1) - 1.0,
        }
    }

    /// Sensitivity of delta to the underlying price.
    ///
    /// Under the reference convention the put value is the negated call
    /// value.
    pub fn gamma(&self, option_type: OptionType) -> Real {
        let BlackScholesInputs {
            spot: s,
            volatility: sigma,
            ..
        } = self.inputs;
        match self.convention {
            Convention::Reference => {
                let gamma = self.df * normal_pdf(self.d1) / (s * sigma * self.sqrt_t);
                option_type.sign() * gamma
            }
            Convention::Textbook => normal_pdf(self.d1) / (s * sigma * self.sqrt_t),
        }
    }

    /// Sensitivity to volatility.
    ///
    /// Under the reference convention the put value is the negated call
    /// value.
    pub fn vega(&self, option_type: OptionType) -> Real {
        let s = self.inputs.spot;
        match self.convention {
            Convention::Reference => {
                let vega = self.df * s * normal_pdf(self.d1) * self.sqrt_t;
                option_type.sign() * vega
            }
            Convention::Textbook => s * normal_pdf(self.d1) * self.sqrt_t,
        }
    }

    /// Time decay per year.
    pub fn theta(&self, option_type: OptionType) -> Real {
        let BlackScholesInputs {
            spot: s,
            strike: k,
            risk_free_rate: r,
            volatility: sigma,
            ..
        } = self.inputs;
        let decay = -(s * normal_pdf(self.d1) * sigma / (2.0 * self.sqrt_t));
        match (self.convention, option_type) {
            (Convention::Reference, OptionType::Call) => {
                decay - r * k * self.df * normal_cdf(self.d1)
            }
            (Convention::Reference, OptionType::Put) => {
                decay + r * k * self.df * normal_cdf(-self.d1)
            }
            (Convention::Textbook, OptionType::Call) => {
                decay - r * k * self.df * normal_cdf(self.d2)
            }
            (Convention::Textbook, OptionType::Put) => {
                decay + r * k * self.df * normal_cdf(-self.d2)
            }
        }
    }

    /// Sensitivity to the risk-free rate.
    pub fn rho(&self, option_type: OptionType) -> Real {
        let BlackScholesInputs {
            strike: k,
            time_to_expiry: t,
            ..
        } = self.inputs;
        match (self.convention, option_type) {
            (Convention::Reference, OptionType::Call) => k * t * self.df * normal_cdf(self.d1),
            (Convention::Reference, OptionType::Put) => -k * t * self.df * normal_cdf(-self.d1),
            (Convention::Textbook, OptionType::Call) => k * t * self.df * normal_cdf(self.d2),
            (Convention::Textbook, OptionType::Put) => -k * t * self.df * normal_cdf(-self.d2),
        }
    }

    /// Price and all five Greeks.
    pub fn greeks(&self, option_type: OptionType) -> Greeks {
        Greeks {
            price: self.price(option_type),
            delta: self.delta(option_type),
            gamma: self.gamma(option_type),
            vega: self.vega(option_type),
            theta: self.theta(option_type),
            rho: self.rho(option_type),
        }
    }
}

fn reference(s: Price, k: Price, r: Rate, sigma: Volatility, t: Time) -> Result<BlackScholes> {
    Ok(BlackScholes::new(BlackScholesInputs::new(s, k, r, sigma, t)?))
}

/// Black-Scholes fair value of a European option (reference convention).
///
/// # Example
/// ```
/// use ms_instruments::OptionType;
/// use ms_pricingengines::black_scholes_price;
///
/// let call = black_scholes_price(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
/// assert!((call - 7.344_723_836_843_571).abs() < 1e-10);
/// assert!(black_scholes_price(100.0, 100.0, 0.05, 0.0, 1.0, OptionType::Call).is_err());
/// ```
pub fn black_scholes_price(
    s: Price,
    k: Price,
    r: Rate,
    sigma: Volatility,
    t: Time,
    option_type: OptionType,
) -> Result<Price> {
    Ok(reference(s, k, r, sigma, t)?.price(option_type))
}

/// Black-Scholes delta (reference convention).
pub fn black_scholes_delta(
    s: Price,
    k: Price,
    r: Rate,
    sigma: Volatility,
    t: Time,
    option_type: OptionType,
) -> Result<Real> {
    Ok(reference(s, k, r, sigma, t)?.delta(option_type))
}

/// Black-Scholes gamma (reference convention: put = −call).
pub fn black_scholes_gamma(
    s: Price,
    k: Price,
    r: Rate,
    sigma: Volatility,
    t: Time,
    option_type: OptionType,
) -> Result<Real> {
    Ok(reference(s, k, r, sigma, t)?.gamma(option_type))
}

/// Black-Scholes vega (reference convention: put = −call).
pub fn black_scholes_vega(
    s: Price,
    k: Price,
    r: Rate,
    sigma: Volatility,
    t: Time,
    option_type: OptionType,
) -> Result<Real> {
    Ok(reference(s, k, r, sigma, t)?.vega(option_type))
}

/// Black-Scholes theta per year (reference convention).
pub fn black_scholes_theta(
    s: Price,
    k: Price,
    r: Rate,
    sigma: Volatility,
    t: Time,
    option_type: OptionType,
) -> Result<Real> {
    Ok(reference(s, k, r, sigma, t)?.theta(option_type))
}

/// Black-Scholes rho (reference convention).
pub fn black_scholes_rho(
    s: Price,
    k: Price,
    r: Rate,
    sigma: Volatility,
    t: Time,
    option_type: OptionType,
) -> Result<Real> {
    Ok(reference(s, k, r, sigma, t)?.rho(option_type))
}

/// `call − put` minus its parity value; zero up to rounding.
///
/// The parity value is `(S − K)·e^{-rT}` under the reference convention
/// and `S − K·e^{-rT}` under the textbook one.
pub fn put_call_parity_gap(inputs: &BlackScholesInputs, convention: Convention) -> Real {
    let bs = BlackScholes::with_convention(*inputs, convention);
    let (s, k, df) = (inputs.spot, inputs.strike, bs.df);
    let parity = match convention {
        Convention::Reference => (s - k) * df,
        Convention::Textbook => s - k * df,
    };
    bs.price(OptionType::Call) - bs.price(OptionType::Put) - parity
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ms_core::Error;

    const CALL: OptionType = OptionType::Call;
    const PUT: OptionType = OptionType::Put;

    fn atm() -> BlackScholesInputs {
        // S=100, K=100, r=5%, σ=20%, T=1
        BlackScholesInputs::new(100.0, 100.0, 0.05, 0.20, 1.0).unwrap()
    }

    #[test]
    fn d1_d2_atm() {
        let bs = BlackScholes::new(atm());
        assert_abs_diff_eq!(bs.d1(), 0.35, epsilon = 1e-14);
        assert_abs_diff_eq!(bs.d2(), 0.15, epsilon = 1e-14);
        assert_abs_diff_eq!(bs.discount_factor(), (-0.05_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn reference_atm_values() {
        let bs = BlackScholes::new(atm());
        let call = bs.greeks(CALL);
        assert_abs_diff_eq!(call.price, 7.344_723_836_843_571, epsilon = 1e-10);
        assert_abs_diff_eq!(call.delta, 0.605_772_053_822_199, epsilon = 1e-12);
        assert_abs_diff_eq!(call.gamma, 0.017_846_982_962_362, epsilon = 1e-12);
        assert_abs_diff_eq!(call.vega, 35.693_965_924_724_715, epsilon = 1e-10);
        assert_abs_diff_eq!(call.theta, -6.781_263_738_280_375, epsilon = 1e-10);
        assert_abs_diff_eq!(call.rho, 60.577_205_382_219_915, epsilon = 1e-10);

        let put = bs.greeks(PUT);
        assert_abs_diff_eq!(put.price, 7.344_723_836_843_571, epsilon = 1e-10);
        assert_abs_diff_eq!(put.delta, -0.345_457_370_678_515, epsilon = 1e-12);
        assert_abs_diff_eq!(put.theta, -2.025_116_615_776_805, epsilon = 1e-10);
        assert_abs_diff_eq!(put.rho, -34.545_737_067_851_49, epsilon = 1e-10);
    }

    #[test]
    fn textbook_atm_values() {
        let bs = BlackScholes::with_convention(atm(), Convention::Textbook);
        let call = bs.greeks(CALL);
        assert_abs_diff_eq!(call.price, 10.4506, epsilon = 1e-4);
        assert_abs_diff_eq!(call.price, 10.450_583_572_185_565, epsilon = 1e-10);
        assert_abs_diff_eq!(call.delta, 0.6368, epsilon = 1e-4);
        assert_abs_diff_eq!(call.gamma, 0.018_762_017_345_847, epsilon = 1e-12);
        assert_abs_diff_eq!(call.vega, 37.524_034_691_693_79, epsilon = 1e-10);
        assert_abs_diff_eq!(call.theta, -6.414_027_546_438_197, epsilon = 1e-10);
        assert_abs_diff_eq!(call.rho, 53.232_481_545_376_345, epsilon = 1e-10);

        let put = bs.greeks(PUT);
        assert_abs_diff_eq!(put.price, 5.5735, epsilon = 1e-4);
        assert_abs_diff_eq!(put.delta, -0.363_169_348_824_381, epsilon = 1e-12);
        assert_abs_diff_eq!(put.gamma, call.gamma, epsilon = 1e-15);
        assert_abs_diff_eq!(put.vega, call.vega, epsilon = 1e-15);
        assert_abs_diff_eq!(put.theta, -1.657_880_423_934_626, epsilon = 1e-10);
        assert_abs_diff_eq!(put.rho, -41.890_460_904_695_06, epsilon = 1e-10);
    }

    #[test]
    fn reference_off_the_money_values() {
        let inputs = BlackScholesInputs::new(110.0, 95.0, 0.03, 0.25, 0.5).unwrap();
        let bs = BlackScholes::new(inputs);
        assert_abs_diff_eq!(bs.price(CALL), 16.786_316_617_936_066, epsilon = 1e-10);
        assert_abs_diff_eq!(bs.price(PUT), 2.009_637_523_890_124, epsilon = 1e-10);
        assert_abs_diff_eq!(bs.delta(CALL), 0.829_427_161_433_018, epsilon = 1e-12);
        assert_abs_diff_eq!(bs.delta(PUT), -0.155_684_778_170_045, epsilon = 1e-12);
        assert_abs_diff_eq!(bs.gamma(CALL), 0.012_226_985_293_285, epsilon = 1e-12);
        assert_abs_diff_eq!(bs.vega(CALL), 18.493_315_256_093_414, epsilon = 1e-10);
        assert_abs_diff_eq!(bs.theta(CALL), -7.057_068_891_213_504, epsilon = 1e-10);
        assert_abs_diff_eq!(bs.theta(PUT), -4.249_499_863_344_775, epsilon = 1e-10);
        assert_abs_diff_eq!(bs.rho(CALL), 39.397_790_168_068_354, epsilon = 1e-10);
        assert_abs_diff_eq!(bs.rho(PUT), -7.395_026_963_077_12, epsilon = 1e-10);
    }

    // Known discrepancy with Black-Scholes theory: the reference formulas
    // report put gamma and vega with the opposite sign of the call.
    #[test]
    fn reference_put_gamma_and_vega_are_negated() {
        let bs = BlackScholes::new(atm());
        assert_eq!(bs.gamma(PUT), -bs.gamma(CALL));
        assert_eq!(bs.vega(PUT), -bs.vega(CALL));
        assert!(bs.gamma(PUT) < 0.0);
        assert!(bs.vega(PUT) < 0.0);
    }

    #[test]
    fn free_functions_match_calculator() {
        let bs = BlackScholes::new(atm());
        for ty in [CALL, PUT] {
            let g = bs.greeks(ty);
            assert_eq!(black_scholes_price(100.0, 100.0, 0.05, 0.2, 1.0, ty), Ok(g.price));
            assert_eq!(black_scholes_delta(100.0, 100.0, 0.05, 0.2, 1.0, ty), Ok(g.delta));
            assert_eq!(black_scholes_gamma(100.0, 100.0, 0.05, 0.2, 1.0, ty), Ok(g.gamma));
            assert_eq!(black_scholes_vega(100.0, 100.0, 0.05, 0.2, 1.0, ty), Ok(g.vega));
            assert_eq!(black_scholes_theta(100.0, 100.0, 0.05, 0.2, 1.0, ty), Ok(g.theta));
            assert_eq!(black_scholes_rho(100.0, 100.0, 0.05, 0.2, 1.0, ty), Ok(g.rho));
        }
    }

    #[test]
    fn parity_gaps_vanish() {
        let inputs = atm();
        let gap = put_call_parity_gap(&inputs, Convention::Reference);
        assert_abs_diff_eq!(gap, 0.0, epsilon = 1e-12);
        let gap = put_call_parity_gap(&inputs, Convention::Textbook);
        assert_abs_diff_eq!(gap, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn short_expiry_converges_to_intrinsic() {
        let short = |s: f64| BlackScholesInputs::new(s, 100.0, 0.05, 0.2, 1e-6).unwrap();

        let itm_call = BlackScholes::new(short(120.0));
        assert_abs_diff_eq!(itm_call.price(CALL), 20.0, epsilon = 1e-5);
        assert_abs_diff_eq!(itm_call.price(PUT), 0.0, epsilon = 1e-12);

        let itm_put = BlackScholes::new(short(80.0));
        assert_abs_diff_eq!(itm_put.price(PUT), 20.0, epsilon = 1e-5);
        assert_abs_diff_eq!(itm_put.price(CALL), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn deep_itm_call_textbook() {
        let inputs = BlackScholesInputs::new(200.0, 100.0, 0.05, 0.20, 1.0).unwrap();
        let bs = BlackScholes::with_convention(inputs, Convention::Textbook);
        assert!(bs.price(CALL) > 100.0);
        assert!(bs.delta(CALL) > 0.95);
    }

    #[test]
    fn negative_rates_are_accepted() {
        let inputs = BlackScholesInputs::new(100.0, 100.0, -0.01, 0.2, 2.0).unwrap();
        let bs = BlackScholes::new(inputs);
        assert!(bs.discount_factor() > 1.0);
        assert!(bs.price(CALL).is_finite());
    }

    #[test]
    fn rejects_out_of_domain_inputs() {
        let bad = [
            (0.0, 100.0, 0.05, 0.2, 1.0),
            (-1.0, 100.0, 0.05, 0.2, 1.0),
            (100.0, 0.0, 0.05, 0.2, 1.0),
            (100.0, 100.0, f64::NAN, 0.2, 1.0),
            (100.0, 100.0, 0.05, 0.0, 1.0),
            (100.0, 100.0, 0.05, -0.2, 1.0),
            (100.0, 100.0, 0.05, 0.2, 0.0),
            (100.0, 100.0, 0.05, 0.2, f64::INFINITY),
        ];
        for (s, k, r, sigma, t) in bad {
            for ty in [CALL, PUT] {
                match black_scholes_price(s, k, r, sigma, t, ty) {
                    Err(Error::InvalidArgument(_)) => {}
                    other => panic!(
                        "expected InvalidArgument for {:?}, got {other:?}",
                        (s, k, r, sigma, t)
                    ),
                }
            }
        }
    }

    #[test]
    fn default_convention_is_reference() {
        assert_eq!(Convention::default(), Convention::Reference);
        assert_eq!(BlackScholes::new(atm()).convention(), Convention::Reference);
    }
}
