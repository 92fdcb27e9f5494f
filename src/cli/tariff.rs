use clap::Parser;

use crate::{
    core::{
        bill::ELECTRICITY_DUTY_RATE,
        customer::CustomerType,
        tariff::Tariff,
    },
    fmt::Percentage,
    prelude::*,
    tables::build_tariff_table,
};

#[derive(Parser)]
pub struct TariffArgs {
    /// Limit the card to one customer type.
    #[clap(long = "customer-type", value_enum, ignore_case = true, env = "CUSTOMER_TYPE")]
    pub customer_type: Option<CustomerType>,

    /// Print the tariffs as JSON instead of a card.
    #[clap(long)]
    pub json: bool,
}

impl TariffArgs {
    pub fn run(self) -> Result {
        let tariffs: Vec<&'static Tariff> = match self.customer_type {
            Some(customer_type) => vec![Tariff::for_customer(customer_type)],
            None => vec![
                Tariff::for_customer(CustomerType::Domestic),
                Tariff::for_customer(CustomerType::Commercial),
            ],
        };
        if self.json {
            println!("{}", serde_json::to_string_pretty(&tariffs)?);
            return Ok(());
        }
        for tariff in tariffs {
            println!("{}", build_tariff_table(tariff));
        }
        info!(
            duty = %Percentage::from_proportion(ELECTRICITY_DUTY_RATE),
            "electricity duty on the energy charge"
        );
        Ok(())
    }
}
