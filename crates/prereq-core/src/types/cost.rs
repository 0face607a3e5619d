//! Cost type for item effort.
//!
//! A cost is a finite, non-negative amount of time needed to complete an
//! item on its own. Aggregated costs are sums of costs; addition is checked
//! so a sum that leaves the finite range is reported instead of stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Non-negative, finite effort value
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Cost(f64);

/// Raised when a raw value cannot be used as a cost
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("invalid cost {0}: must be finite and non-negative")]
pub struct CostError(pub f64);

impl Cost {
    /// The cost of an item that takes no time
    pub const ZERO: Cost = Cost(0.0);

    /// Create a cost, rejecting negative, NaN and infinite values
    pub fn new(value: f64) -> Result<Self, CostError> {
        if value.is_finite() && value >= 0.0 {
            // Normalize -0.0 so equality and display behave
            Ok(Self(value + 0.0))
        } else {
            Err(CostError(value))
        }
    }

    /// Raw value
    pub fn value(self) -> f64 {
        self.0
    }

    /// Check if this cost is zero
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Add two costs, returning `None` if the sum is not finite
    pub fn checked_add(self, other: Cost) -> Option<Cost> {
        let sum = self.0 + other.0;
        sum.is_finite().then_some(Cost(sum))
    }

    /// Sum costs, returning `None` as soon as a partial sum is not finite
    pub fn checked_sum<I>(costs: I) -> Option<Cost>
    where
        I: IntoIterator<Item = Cost>,
    {
        costs.into_iter().try_fold(Cost::ZERO, Cost::checked_add)
    }
}

impl TryFrom<f64> for Cost {
    type Error = CostError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cost> for f64 {
    fn from(cost: Cost) -> Self {
        cost.0
    }
}

impl From<u32> for Cost {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl PartialEq<f64> for Cost {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 && self.0 < 1e15 {
            write!(f, "{}", self.0 as u64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
