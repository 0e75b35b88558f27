//! Analytic European option engine (Black-Scholes).
//!
//! Prices a quoted [`OptionContract`] from spot, rate and volatility. The
//! contract's expiry in whole days is turned into a year fraction with the
//! global [`Settings`] day-count basis.

use crate::black_scholes::{BlackScholes, BlackScholesInputs, Convention};
use ms_core::{errors::Result, require, Price, Rate, Settings, Volatility};
use ms_instruments::{OptionContract, PricingEngine, PricingResults};

/// Analytic pricing engine for European options.
///
/// The NPV is the Black-Scholes price; `delta`, `gamma`, `vega`, `theta`
/// and `rho` are reported as additional results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEuropeanEngine {
    spot: Price,
    risk_free_rate: Rate,
    volatility: Volatility,
    convention: Convention,
}

impl AnalyticEuropeanEngine {
    /// Create an engine using [`Convention::Reference`].
    pub fn new(spot: Price, risk_free_rate: Rate, volatility: Volatility) -> Self {
        Self {
            spot,
            risk_free_rate,
            volatility,
            convention: Convention::Reference,
        }
    }

    /// Use a different set of formulas.
    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    /// Black-Scholes inputs for `contract` under the current settings.
    pub fn inputs_for(&self, contract: &OptionContract) -> Result<BlackScholesInputs> {
        require!(
            contract.time_to_expiry > 0,
            "option '{}' has expired (0 days to expiry)",
            contract.name
        );
        let t = Settings::instance().year_fraction(contract.time_to_expiry);
        BlackScholesInputs::new(
            self.spot,
            contract.strike_price,
            self.risk_free_rate,
            self.volatility,
            t,
        )
    }
}

impl PricingEngine<OptionContract> for AnalyticEuropeanEngine {
    fn calculate(&self, contract: &OptionContract) -> Result<PricingResults> {
        let inputs = self.inputs_for(contract)?;
        let greeks = BlackScholes::with_convention(inputs, self.convention)
            .greeks(contract.option_type);
        tracing::trace!(
            contract = %contract.name,
            option_type = %contract.option_type,
            t = inputs.time_to_expiry(),
            price = greeks.price,
            "priced option"
        );

        Ok(PricingResults::from_npv(greeks.price)
            .with_result("delta", greeks.delta)
            .with_result("gamma", greeks.gamma)
            .with_result("vega", greeks.vega)
            .with_result("theta", greeks.theta)
            .with_result("rho", greeks.rho))
    }
}
