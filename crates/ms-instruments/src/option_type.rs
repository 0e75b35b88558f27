//! Option type (call or put).
//!
//! Options are identified by the literal tags `"call"` and `"put"`; anything
//! else is rejected when parsing.

use ms_core::errors::{invalid_argument, Result};
use ms_core::{Error, Real};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// A call option (right to buy).
    #[default]
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// The literal tag: `"call"` or `"put"`.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }

    /// Parse a literal tag.
    ///
    /// Fails with [`Error::InvalidArgument`] for anything other than
    /// `"call"` or `"put"`.
    pub fn parse_tag(tag: &str) -> Result<Self> {
        match tag {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(invalid_argument(format!(
                "option_type must be 'call' or 'put', got '{other}'"
            ))),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_tag(s)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
