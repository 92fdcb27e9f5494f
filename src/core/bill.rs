use serde::Serialize;

use crate::{
    core::{customer::CustomerType, tariff::Tariff},
    quantity::{cost::Rupees, energy::Units},
};

/// Electricity duty is levied as a share of the energy charge.
pub const ELECTRICITY_DUTY_RATE: f64 = 0.06;

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum BillingError {
    #[error("invalid customer type: `{0}`")]
    InvalidCustomerType(String),

    #[error("consumption must not be negative, got {0}")]
    NegativeConsumption(Units),
}

/// One customer's bill, component by component.
///
/// Each component is rounded to whole paise on its own; the total is the
/// plain sum of the rounded components and is not rounded again.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Bill {
    pub energy_charge: Rupees,
    pub fixed_charge: Rupees,
    pub customer_charge: Rupees,
    pub electricity_duty: Rupees,
    pub total_amount: Rupees,
}

impl Bill {
    /// Price the consumption under the customer's tariff.
    pub fn compute(customer_type: CustomerType, consumption: Units) -> Result<Self, BillingError> {
        if consumption < Units::ZERO {
            return Err(BillingError::NegativeConsumption(consumption));
        }
        let tariff = Tariff::for_customer(customer_type);
        let energy_charge = tariff.energy_charge(consumption);
        let electricity_duty = electricity_duty(energy_charge);
        let fixed_charge = tariff.fixed_charge;
        let customer_charge = customer_charge(consumption);
        Ok(Self {
            energy_charge,
            fixed_charge,
            customer_charge,
            electricity_duty,
            total_amount: energy_charge + fixed_charge + customer_charge + electricity_duty,
        })
    }
}

/// Metering consumption between two readings of the same register.
///
/// The register only counts up, so a current reading below the previous one
/// is a misread, not a rollover.
pub fn consumption_between(previous: Units, current: Units) -> Result<Units, BillingError> {
    if current < previous {
        return Err(BillingError::NegativeConsumption(current - previous));
    }
    Ok(current - previous)
}

/// Flat charge stepped on the same consumption the energy charge is priced on.
fn customer_charge(consumption: Units) -> Rupees {
    if consumption <= Units::from(100.0) {
        Rupees::from(25.0)
    } else if consumption <= Units::from(200.0) {
        Rupees::from(35.0)
    } else {
        Rupees::from(45.0)
    }
}

fn electricity_duty(energy_charge: Rupees) -> Rupees {
    (energy_charge * ELECTRICITY_DUTY_RATE).round_to_paise()
}
