use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Rupees, rate::UnitRate};

/// Consumed energy in billing units (kilowatt-hours on the meter).
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
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
#[from(f64, OrderedFloat<f64>)]
#[must_use]
pub struct Units(pub OrderedFloat<f64>);

impl Units {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
}

impl Mul<UnitRate> for Units {
    type Output = Rupees;

    fn mul(self, rhs: UnitRate) -> Self::Output {
        Rupees(self.0 * rhs.0)
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kWh", self.0)
    }
}

impl Debug for Units {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}kWh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_rate() {
        assert_eq!(Units::from(50.0) * UnitRate::from(1.95), Rupees::from(97.5));
    }
}
