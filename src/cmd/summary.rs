//! Summary command - take-home pay after income tax and National Insurance

use super::{rates_label, write_csv, RatesArgs, SalaryArgs};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};
use takehome::money::{format_gbp, format_pct};
use takehome::{Period, TakeHome, TakeHomePeriod, TaxCalculator};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(flatten)]
    rates: RatesArgs,

    #[command(flatten)]
    salary: SalaryArgs,

    /// Output as JSON instead of formatted text
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    rates: String,
    #[serde(flatten)]
    summary: TakeHome,
    periods: Vec<TakeHomePeriod>,
}

/// Row for the summary table output
#[derive(Debug, Clone, Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "")]
    item: String,

    #[tabled(rename = "Yearly")]
    yearly: String,

    #[tabled(rename = "Monthly")]
    monthly: String,

    #[tabled(rename = "Weekly")]
    weekly: String,
}

const PERIODS: [Period; 3] = [Period::Yearly, Period::Monthly, Period::Weekly];

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let calculator = self.rates.calculator()?;
        let summary = calculator.take_home(self.salary.gross(), self.salary.deductions())?;

        if self.json {
            self.print_json(&calculator, summary)
        } else if self.csv {
            write_csv(build_rows(&calculator, &summary))
        } else {
            self.print_summary(&calculator, &summary);
            Ok(())
        }
    }

    fn print_summary(&self, calculator: &TaxCalculator, summary: &TakeHome) {
        println!();
        println!("TAKE-HOME PAY ({})", rates_label(calculator));
        println!();

        let table = Table::new(build_rows(calculator, summary))
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);

        println!();
        println!("Personal allowance: {}", format_gbp(summary.personal_allowance));
        if let Some(band) = summary.marginal_band {
            println!("Marginal band: {}", band);
        }
        println!();
    }

    fn print_json(&self, calculator: &TaxCalculator, summary: TakeHome) -> anyhow::Result<()> {
        let data = SummaryData {
            rates: rates_label(calculator),
            summary,
            periods: PERIODS.iter().map(|p| summary.per_period(*p)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}

fn build_rows(calculator: &TaxCalculator, summary: &TakeHome) -> Vec<SummaryRow> {
    let config = calculator.config();
    let scaled = |amount: Decimal| -> [String; 3] {
        PERIODS.map(|period| format_gbp((amount / period.divisor()).round_dp(2)))
    };
    let row = |item: String, amount: Decimal| {
        let [yearly, monthly, weekly] = scaled(amount);
        SummaryRow {
            item,
            yearly,
            monthly,
            weekly,
        }
    };

    let mut rows = vec![row("Gross pay".to_string(), summary.gross)];
    if summary.deductions > Decimal::ZERO {
        rows.push(row("Deductions".to_string(), summary.deductions));
    }
    rows.push(row("Taxable income".to_string(), summary.taxable_income));

    let bands = [
        ("Basic", config.basic_rate_percentage, summary.income_tax.basic_tax),
        ("Higher", config.higher_rate_percentage, summary.income_tax.higher_tax),
        ("Additional", config.additional_rate_percentage, summary.income_tax.additional_tax),
    ];
    for (name, pct, tax) in bands {
        if tax > Decimal::ZERO {
            rows.push(row(format!("{} rate tax @ {}", name, format_pct(pct)), tax));
        }
    }
    rows.push(row("Income tax".to_string(), summary.total_tax()));
    rows.push(row("National Insurance".to_string(), summary.national_insurance));
    rows.push(row("Take-home pay".to_string(), summary.net));
    rows
}
