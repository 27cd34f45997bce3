use crate::Result;

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use serde::{Serialize, Serializer};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1}")]
    Parse(String, String),
}

/// Fixed-point amount of currency
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(pub Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn parse(string: &str) -> Result<Self> {
        let amount = Decimal::from_str(string.trim())
            .map_err(|e| MoneyError::Parse(e.to_string(), string.to_string()))?;

        return Ok(Money(amount));
    }

    /// Adds `other` in place. On overflow the value is left untouched.
    pub fn add(&mut self, other: &Self) -> Result {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or(MoneyError::Overflow("add", *self, *other))?;

        self.0 = sum;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or(MoneyError::Overflow("sub", *self, *other))?;

        self.0 = difference;

        return Ok(());
    }

    pub fn negate(self) -> Self {
        Self(-self.0)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl FromStr for Money {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Money::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{:.2}", self.0.round_dp(2));
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
