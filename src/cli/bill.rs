use clap::Parser;

use crate::{
    core::{
        bill::{Bill, consumption_between},
        customer::CustomerType,
    },
    prelude::*,
    quantity::energy::Units,
    tables::build_receipt_table,
};

#[derive(Parser)]
pub struct BillArgs {
    /// Customer name as printed on the receipt.
    #[clap(long = "customer-name", env = "CUSTOMER_NAME")]
    pub customer_name: String,

    /// Service connection number.
    #[clap(long = "service-number", env = "SERVICE_NUMBER")]
    pub service_number: String,

    #[clap(long = "customer-type", value_enum, ignore_case = true, env = "CUSTOMER_TYPE")]
    pub customer_type: CustomerType,

    /// Meter reading at the start of the billing period.
    #[clap(long = "previous-reading")]
    pub previous_reading: Units,

    /// Meter reading at the end of the billing period.
    #[clap(long = "current-reading")]
    pub current_reading: Units,

    /// Print the bill as JSON instead of a receipt.
    #[clap(long)]
    pub json: bool,
}

impl BillArgs {
    pub fn run(self) -> Result {
        let consumption = consumption_between(self.previous_reading, self.current_reading)
            .context("the current reading must not be below the previous one")?;
        info!(%consumption, customer_type = %self.customer_type, "metered");

        let bill = Bill::compute(self.customer_type, consumption)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&bill)?);
        } else {
            println!("{}", build_receipt_table(&self, consumption, &bill));
        }
        Ok(())
    }
}
