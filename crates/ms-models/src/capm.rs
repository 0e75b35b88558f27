//! Capital Asset Pricing Model.
//!
//! ```text
//! E[R] = r_f + β (R − r_f)
//! ```
//!
//! The security-market-line ratio divides the excess expected return by
//! the model volatility: `(E[R] − r_f) / σ`.

use ms_core::{errors::Result, require, Rate, Real, Volatility};

/// CAPM with a fixed risk-free rate, beta and volatility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capm {
    risk_free_rate: Rate,
    beta: Real,
    volatility: Volatility,
}

impl Capm {
    /// Create a model.
    ///
    /// Fails with `InvalidArgument` if any input is non-finite or the
    /// volatility is zero.
    pub fn new(risk_free_rate: Rate, beta: Real, volatility: Volatility) -> Result<Self> {
        require!(
            risk_free_rate.is_finite() && beta.is_finite(),
            "risk-free rate and beta must be finite, got r_f={risk_free_rate}, beta={beta}"
        );
        require!(
            volatility.is_finite() && volatility != 0.0,
            "volatility must be finite and non-zero, got {volatility}"
        );
        Ok(Self {
            risk_free_rate,
            beta,
            volatility,
        })
    }

    /// Risk-free rate.
    pub fn risk_free_rate(&self) -> Rate {
        self.risk_free_rate
    }

    /// Beta.
    pub fn beta(&self) -> Real {
        self.beta
    }

    /// Volatility.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }

    /// Expected return for one observed stock return.
    #[inline]
    pub fn expected_return(&self, stock_return: Rate) -> Rate {
        self.risk_free_rate + self.beta * (stock_return - self.risk_free_rate)
    }

    /// Elementwise [`expected_return`](Self::expected_return).
    pub fn expected_returns(&self, stock_returns: &[Rate]) -> Vec<Rate> {
        stock_returns
            .iter()
            .map(|&r| self.expected_return(r))
            .collect()
    }

    /// Security-market-line ratio for one observed stock return.
    #[inline]
    pub fn sml_ratio(&self, stock_return: Rate) -> Real {
        (self.expected_return(stock_return) - self.risk_free_rate) / self.volatility
    }

    /// Elementwise security-market-line ratio.
    ///
    /// The market series only has to line up with the stock series; the
    /// ratio itself depends on the stock returns alone.
    pub fn security_market_line(
        &self,
        stock_returns: &[Rate],
        market_returns: &[Rate],
    ) -> Result<Vec<Real>> {
        require!(
            stock_returns.len() == market_returns.len(),
            "stock and market return series differ in length ({} vs {})",
            stock_returns.len(),
            market_returns.len()
        );
        Ok(stock_returns.iter().map(|&r| self.sml_ratio(r)).collect())
    }
}
