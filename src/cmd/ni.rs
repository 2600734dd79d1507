//! NI command - National Insurance contributions

use super::{rates_label, RatesArgs};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use takehome::money::format_gbp;
use takehome::Frequency;

#[derive(Args, Debug)]
pub struct NiCommand {
    #[command(flatten)]
    rates: RatesArgs,

    /// Annual gross salary in pounds (e.g., 60000 or 60000.50)
    #[arg(short, long, allow_hyphen_values = true)]
    gross: Decimal,

    /// Report the yearly or weekly contribution
    #[arg(short, long, default_value = "yearly")]
    frequency: String,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct NiOutput {
    rates: String,
    frequency: Frequency,
    national_insurance: Decimal,
}

impl NiCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let frequency: Frequency = self.frequency.parse()?;
        let calculator = self.rates.calculator()?;
        let ni = calculator.calculate_national_insurance(self.gross, frequency)?;

        if self.json {
            let output = NiOutput {
                rates: rates_label(&calculator),
                frequency,
                national_insurance: ni,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            let per = match frequency {
                Frequency::Yearly => "year",
                Frequency::Weekly => "week",
            };
            println!(
                "National Insurance ({}): {} per {}",
                rates_label(&calculator),
                format_gbp(ni),
                per
            );
        }
        Ok(())
    }
}
