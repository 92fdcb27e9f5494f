mod bill;
mod tariff;

use clap::{Parser, Subcommand};

pub use self::{bill::BillArgs, tariff::TariffArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute a bill from meter readings and print the receipt.
    #[clap(name = "bill")]
    Bill(BillArgs),

    /// Print the tariff card: slabs, fixed charges and the duty rate.
    #[clap(name = "tariff")]
    Tariff(TariffArgs),
}
