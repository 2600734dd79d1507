//! Pension command - reserved, contributions are not calculated yet

use super::{rates_label, RatesArgs};
use clap::Args;
use takehome::money::format_gbp;

#[derive(Args, Debug)]
pub struct PensionCommand {
    #[command(flatten)]
    rates: RatesArgs,
}

impl PensionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let calculator = self.rates.calculator()?;
        let pension = calculator.calculate_pension()?;
        println!("Pension ({}): {}", rates_label(&calculator), format_gbp(pension));
        Ok(())
    }
}
