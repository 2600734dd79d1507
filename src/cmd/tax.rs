//! Tax command - income tax owed, optionally split by band

use super::{rates_label, RatesArgs, SalaryArgs};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use takehome::money::{format_gbp, format_pct};
use takehome::{TaxBand, TaxBreakdown, TaxCalculator};

#[derive(Args, Debug)]
pub struct TaxCommand {
    #[command(flatten)]
    rates: RatesArgs,

    #[command(flatten)]
    salary: SalaryArgs,

    /// Show the tax owed in each band
    #[arg(short, long)]
    breakdown: bool,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct TaxTotal {
    rates: String,
    income_tax: Decimal,
}

#[derive(Debug, Clone, Tabled)]
struct BandRow {
    #[tabled(rename = "Band")]
    band: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

impl TaxCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let calculator = self.rates.calculator()?;
        let breakdown = calculator.calculate_tax_breakdown(self.salary.gross(), self.salary.deductions())?;

        match (self.breakdown, self.json) {
            (true, true) => println!("{}", serde_json::to_string_pretty(&breakdown)?),
            (false, true) => {
                let total = TaxTotal {
                    rates: rates_label(&calculator),
                    income_tax: breakdown.total(),
                };
                println!("{}", serde_json::to_string_pretty(&total)?)
            }
            (true, false) => self.print_breakdown(&calculator, &breakdown),
            (false, false) => println!(
                "Income tax ({}): {}",
                rates_label(&calculator),
                format_gbp(breakdown.total())
            ),
        }
        Ok(())
    }

    fn print_breakdown(&self, calculator: &TaxCalculator, breakdown: &TaxBreakdown) {
        let config = calculator.config();
        let rate = |band: TaxBand| match band {
            TaxBand::Basic => config.basic_rate_percentage,
            TaxBand::Higher => config.higher_rate_percentage,
            TaxBand::Additional => config.additional_rate_percentage,
        };

        let mut rows: Vec<BandRow> = [TaxBand::Basic, TaxBand::Higher, TaxBand::Additional]
            .into_iter()
            .map(|band| BandRow {
                band: band.to_string(),
                rate: format_pct(rate(band)),
                tax: format_gbp(breakdown.get(band)),
            })
            .collect();
        rows.push(BandRow {
            band: "total".to_string(),
            rate: String::new(),
            tax: format_gbp(breakdown.total()),
        });

        println!();
        println!("INCOME TAX ({})", rates_label(calculator));
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!();
    }
}
