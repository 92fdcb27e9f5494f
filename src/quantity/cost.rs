use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Money amount in Indian rupees.
#[derive(
    Clone,
    Copy,
    Deserialize,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(f64, OrderedFloat<f64>)]
#[must_use]
pub struct Rupees(pub OrderedFloat<f64>);

impl Rupees {
    pub const ZERO: Self = Self(OrderedFloat(0.0));

    /// Round to whole [paise][1], the smallest amount that appears on a bill.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Paisa
    pub fn round_to_paise(self) -> Self {
        Self(OrderedFloat((self.0.0 * 100.0).round() / 100.0))
    }
}

impl Mul<f64> for Rupees {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for Rupees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

impl Debug for Rupees {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_paise() {
        assert_abs_diff_eq!(Rupees::from(14.849_999_9).round_to_paise().0.0, 14.85);
        assert_abs_diff_eq!(Rupees::from(109.5).round_to_paise().0.0, 109.5);
    }
}
