//! Global library settings.
//!
//! [`Settings`] holds the **day-count basis** used to turn an expiry quoted
//! in whole days into a year fraction. It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the value is stored behind a `Mutex` so that it can be
//! changed from any thread. Code that changes it temporarily should use
//! [`ScopedDaysPerYear`], which restores the previous value on drop.

use crate::errors::Result;
use crate::{require, Real};
use std::sync::{Mutex, OnceLock};

/// Day-count basis used until [`Settings::set_days_per_year`] is called.
pub const DEFAULT_DAYS_PER_YEAR: Real = 365.0;

/// Process-wide settings used by the moonstock library.
pub struct Settings {
    days_per_year: Mutex<Real>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            days_per_year: Mutex::new(DEFAULT_DAYS_PER_YEAR),
        })
    }

    /// Number of days in one year for day-to-year conversions.
    pub fn days_per_year(&self) -> Real {
        *self.days_per_year.lock().expect("Settings mutex poisoned")
    }

    /// Set the day-count basis.
    ///
    /// Fails with `InvalidArgument` unless `days` is finite and positive.
    pub fn set_days_per_year(&self, days: Real) -> Result<()> {
        require!(
            days.is_finite() && days > 0.0,
            "days per year must be positive and finite, got {days}"
        );
        *self.days_per_year.lock().expect("Settings mutex poisoned") = days;
        tracing::debug!(days, "day-count basis changed");
        Ok(())
    }

    /// Restore the default day-count basis.
    pub fn reset(&self) {
        *self.days_per_year.lock().expect("Settings mutex poisoned") = DEFAULT_DAYS_PER_YEAR;
    }

    /// Convert a number of days into a year fraction using the current basis.
    pub fn year_fraction(&self, days: u32) -> Real {
        Real::from(days) / self.days_per_year()
    }
}

/// Sets the day-count basis for the lifetime of the guard.
///
/// The previous basis is restored when the guard is dropped.
#[must_use = "the previous basis is restored as soon as the guard is dropped"]
pub struct ScopedDaysPerYear {
    previous: Real,
}

impl ScopedDaysPerYear {
    /// Install `days` as the day-count basis until the guard is dropped.
    pub fn new(days: Real) -> Result<Self> {
        let settings = Settings::instance();
        let previous = settings.days_per_year();
        settings.set_days_per_year(days)?;
        Ok(Self { previous })
    }
}

impl Drop for ScopedDaysPerYear {
    fn drop(&mut self) {
        *Settings::instance()
            .days_per_year
            .lock()
            .expect("Settings mutex poisoned") = self.previous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use approx::assert_abs_diff_eq;

    // One test body: the singleton is shared by every test in this binary.
    #[test]
    fn days_per_year_lifecycle() {
        let settings = Settings::instance();
        assert_abs_diff_eq!(settings.days_per_year(), DEFAULT_DAYS_PER_YEAR);
        assert_abs_diff_eq!(settings.year_fraction(73), 0.2, epsilon = 1e-15);

        {
            let _guard = ScopedDaysPerYear::new(360.0).unwrap();
            assert_abs_diff_eq!(settings.days_per_year(), 360.0);
            assert_abs_diff_eq!(settings.year_fraction(90), 0.25, epsilon = 1e-15);
        }
        assert_abs_diff_eq!(settings.days_per_year(), DEFAULT_DAYS_PER_YEAR);

        assert!(matches!(
            settings.set_days_per_year(0.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            ScopedDaysPerYear::new(f64::NAN),
            Err(Error::InvalidArgument(_))
        ));
        assert_abs_diff_eq!(settings.days_per_year(), DEFAULT_DAYS_PER_YEAR);

        settings.set_days_per_year(252.0).unwrap();
        assert_abs_diff_eq!(settings.days_per_year(), 252.0);
        settings.reset();
        assert_abs_diff_eq!(settings.days_per_year(), DEFAULT_DAYS_PER_YEAR);
    }
}
