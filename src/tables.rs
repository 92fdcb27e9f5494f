use chrono::Local;
use comfy_table::{Attribute, Cell, CellAlignment, Table, modifiers, presets};

use crate::{
    cli::BillArgs,
    core::{bill::Bill, tariff::Tariff},
    quantity::energy::Units,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

fn amount_row(label: &str, value: impl ToString) -> Vec<Cell> {
    vec![Cell::new(label), Cell::new(value).set_alignment(CellAlignment::Right)]
}

pub fn build_receipt_table(args: &BillArgs, consumption: Units, bill: &Bill) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("TGNPDCL Electricity Bill").add_attribute(Attribute::Bold),
        Cell::new(Local::now().format("%d-%m-%Y")).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Customer"), Cell::new(&args.customer_name)]);
    table.add_row(vec![Cell::new("Service number"), Cell::new(&args.service_number)]);
    table.add_row(vec![Cell::new("Customer type"), Cell::new(args.customer_type)]);
    table.add_row(amount_row("Previous reading", args.previous_reading));
    table.add_row(amount_row("Current reading", args.current_reading));
    table.add_row(amount_row("Units consumed", consumption));
    table.add_row(amount_row("Energy charges (EC)", bill.energy_charge));
    table.add_row(amount_row("Fixed charges (FC)", bill.fixed_charge));
    table.add_row(amount_row("Customer charges (CC)", bill.customer_charge));
    table.add_row(amount_row("Electricity duty (ED)", bill.electricity_duty));
    table.add_row(vec![
        Cell::new("Total amount").add_attribute(Attribute::Bold),
        Cell::new(bill.total_amount)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}

#[must_use]
pub fn build_tariff_table(tariff: &Tariff) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new(tariff.customer_type).add_attribute(Attribute::Bold),
        Cell::new("Rate").set_alignment(CellAlignment::Right),
    ]);
    for slab in tariff.slabs {
        let range = slab.ceiling.map_or_else(
            || format!("{}+ kWh", slab.floor),
            |ceiling| format!("{} – {ceiling} kWh", slab.floor),
        );
        table.add_row(amount_row(&range, slab.rate));
    }
    table.add_row(amount_row("Fixed charge", tariff.fixed_charge));
    table
}
