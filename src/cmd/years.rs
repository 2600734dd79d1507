//! Years command - list the built-in tax years and their rates

use clap::Args;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use takehome::money::{format_gbp, format_pct};
use takehome::{TaxYear, TaxYearConfig};

#[derive(Args, Debug)]
pub struct YearsCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct YearConfig {
    tax_year: String,
    #[serde(flatten)]
    config: TaxYearConfig,
}

#[derive(Debug, Clone, Tabled)]
struct YearRow {
    #[tabled(rename = "Tax Year")]
    tax_year: String,

    #[tabled(rename = "Allowance")]
    allowance: String,

    #[tabled(rename = "Taper From")]
    taper_from: String,

    #[tabled(rename = "Basic To")]
    basic_to: String,

    #[tabled(rename = "Higher To")]
    higher_to: String,

    #[tabled(rename = "Rates")]
    rates: String,

    #[tabled(rename = "NI Limits (weekly)")]
    ni_limits: String,

    #[tabled(rename = "NI Rates")]
    ni_rates: String,
}

impl YearsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let years: Vec<(TaxYear, TaxYearConfig)> = TaxYear::supported()
            .iter()
            .filter_map(|y| y.config().map(|c| (*y, c)))
            .collect();

        if self.json {
            let data: Vec<_> = years
                .into_iter()
                .map(|(year, config)| YearConfig {
                    tax_year: year.display(),
                    config,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&data)?);
            return Ok(());
        }

        let rows: Vec<YearRow> = years.iter().map(|(year, config)| year_row(*year, config)).collect();
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        Ok(())
    }
}

fn year_row(year: TaxYear, config: &TaxYearConfig) -> YearRow {
    let hundred = rust_decimal::Decimal::ONE_HUNDRED;
    YearRow {
        tax_year: year.display(),
        allowance: format_gbp(config.personal_allowance),
        taper_from: format_gbp(config.personal_allowance_upper),
        basic_to: format_gbp(config.basic_rate),
        higher_to: format_gbp(config.higher_rate),
        rates: format!(
            "{}/{}/{}",
            format_pct(config.basic_rate_percentage),
            format_pct(config.higher_rate_percentage),
            format_pct(config.additional_rate_percentage)
        ),
        ni_limits: format!(
            "{} - {}",
            format_gbp(config.lower_earnings_limit_ni),
            format_gbp(config.upper_earnings_limit_ni)
        ),
        ni_rates: format!(
            "{}/{}",
            format_pct(config.national_insurance_rate_lower * hundred),
            format_pct(config.national_insurance_rate_upper * hundred)
        ),
    }
}
