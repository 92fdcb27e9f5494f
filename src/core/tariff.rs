use ordered_float::OrderedFloat;
use serde::Serialize;

use crate::{
    core::customer::CustomerType,
    quantity::{cost::Rupees, energy::Units, rate::UnitRate},
};

/// A contiguous range of consumption billed at one per-unit rate.
///
/// Units are counted from 1, so a bounded slab covers
/// `ceiling − floor + 1` of them. The top slab of every tariff is
/// open-ended.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Slab {
    /// First unit covered by the slab.
    pub floor: u32,

    /// Last unit covered by the slab, `None` for the open-ended top slab.
    pub ceiling: Option<u32>,

    /// Price of each unit within the slab.
    pub rate: UnitRate,
}

impl Slab {
    /// How many units the slab can absorb, `None` when unbounded.
    fn capacity(&self) -> Option<Units> {
        self.ceiling.map(|ceiling| Units(OrderedFloat(f64::from(ceiling - self.floor + 1))))
    }
}

/// Progressive rate card of one customer type.
#[derive(Copy, Clone, Serialize)]
pub struct Tariff {
    pub customer_type: CustomerType,
    pub slabs: &'static [Slab],
    pub fixed_charge: Rupees,
}

pub const DOMESTIC: Tariff = Tariff {
    customer_type: CustomerType::Domestic,
    slabs: &[
        Slab { floor: 1, ceiling: Some(50), rate: UnitRate(OrderedFloat(1.95)) },
        Slab { floor: 51, ceiling: Some(100), rate: UnitRate(OrderedFloat(3.00)) },
        Slab { floor: 101, ceiling: Some(200), rate: UnitRate(OrderedFloat(4.50)) },
        Slab { floor: 201, ceiling: None, rate: UnitRate(OrderedFloat(7.50)) },
    ],
    fixed_charge: Rupees(OrderedFloat(50.0)),
};

pub const COMMERCIAL: Tariff = Tariff {
    customer_type: CustomerType::Commercial,
    slabs: &[
        Slab { floor: 1, ceiling: Some(100), rate: UnitRate(OrderedFloat(6.50)) },
        Slab { floor: 101, ceiling: Some(200), rate: UnitRate(OrderedFloat(7.50)) },
        Slab { floor: 201, ceiling: None, rate: UnitRate(OrderedFloat(8.50)) },
    ],
    fixed_charge: Rupees(OrderedFloat(100.0)),
};

impl Tariff {
    pub fn for_customer(customer_type: CustomerType) -> &'static Self {
        match customer_type {
            CustomerType::Domestic => &DOMESTIC,
            CustomerType::Commercial => &COMMERCIAL,
        }
    }

    /// Apportion the consumption over the slabs and price each part.
    ///
    /// Walks the slabs bottom-up, letting each absorb at most its capacity,
    /// until nothing remains. The result is rounded to whole paise.
    pub fn energy_charge(&self, consumption: Units) -> Rupees {
        let mut remaining = consumption;
        let mut total = Rupees::ZERO;
        for slab in self.slabs {
            if remaining <= Units::ZERO {
                break;
            }
            let absorbed = slab.capacity().map_or(remaining, |capacity| remaining.min(capacity));
            total += absorbed * slab.rate;
            remaining -= absorbed;
        }
        total.round_to_paise()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_consumption_is_free() {
        assert_eq!(DOMESTIC.energy_charge(Units::ZERO), Rupees::ZERO);
    }

    /// 50 units at 1.95 plus 50 units at 3.00.
    #[test]
    fn test_domestic_two_slabs() {
        assert_eq!(DOMESTIC.energy_charge(Units::from(100.0)), Rupees::from(247.5));
    }

    /// The first slab alone.
    #[test]
    fn test_domestic_first_slab() {
        assert_eq!(DOMESTIC.energy_charge(Units::from(50.0)), Rupees::from(97.5));
    }

    /// 100 at 6.50, 100 at 7.50 and the remaining 50 at 8.50.
    #[test]
    fn test_commercial_spills_into_open_slab() {
        assert_eq!(COMMERCIAL.energy_charge(Units::from(250.0)), Rupees::from(1825.0));
    }

    /// The open-ended slab absorbs everything past the bounded ones.
    #[test]
    fn test_domestic_open_slab() {
        // 97.50 + 150.00 + 450.00 + 800 × 7.50:
        assert_eq!(DOMESTIC.energy_charge(Units::from(1000.0)), Rupees::from(6697.5));
    }

    /// Fractional consumption is billed pro rata within a slab.
    #[test]
    fn test_fractional_consumption() {
        assert_eq!(DOMESTIC.energy_charge(Units::from(10.4)), Rupees::from(20.28));
    }

    #[test]
    fn test_monotonic_in_consumption() {
        for tariff in [&DOMESTIC, &COMMERCIAL] {
            let mut previous = Rupees::ZERO;
            for tenths in 0..=4000_u32 {
                let charge = tariff.energy_charge(Units::from(f64::from(tenths) / 10.0));
                assert!(charge >= previous, "charge dropped at {tenths} tenths");
                previous = charge;
            }
        }
    }

    /// Bounded capacities land on the advertised boundaries:
    /// 50/50/100 for domestic, 100/100 for commercial.
    #[test]
    fn test_slab_capacities() {
        let domestic: Vec<_> = DOMESTIC.slabs.iter().filter_map(Slab::capacity).collect();
        assert_eq!(domestic, [Units::from(50.0), Units::from(50.0), Units::from(100.0)]);
        let commercial: Vec<_> = COMMERCIAL.slabs.iter().filter_map(Slab::capacity).collect();
        assert_eq!(commercial, [Units::from(100.0), Units::from(100.0)]);
    }
}
