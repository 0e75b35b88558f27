//! Probability distributions.
//!
//! Only the standard normal is needed by the closed-form formulas; the
//! complementary error function comes from `libm`.

pub mod normal;

pub use normal::{normal_cdf, normal_pdf};
