pub mod ni;
pub mod pension;
pub mod schema;
pub mod summary;
pub mod tax;
pub mod years;

use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use takehome::{TaxCalculator, TaxYear, TaxYearConfig};

/// Which rates to calculate with
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Tax year (e.g., 2025 or 2024/25), defaults to the current tax year
    #[arg(short, long)]
    year: Option<TaxYear>,

    /// JSON file with custom rates and thresholds, overrides --year
    #[arg(short, long, conflicts_with = "year")]
    config: Option<PathBuf>,
}

impl RatesArgs {
    pub fn tax_year(&self) -> TaxYear {
        self.year.unwrap_or_else(|| {
            let current = TaxYear::current();
            if current.config().is_some() {
                current
            } else {
                let latest = TaxYear::latest();
                log::warn!("No rates for {}, falling back to {}", current, latest);
                latest
            }
        })
    }

    pub fn calculator(&self) -> anyhow::Result<TaxCalculator> {
        match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open config file {}", path.display()))?;
                let config = TaxYearConfig::read_json(BufReader::new(file))
                    .with_context(|| format!("Failed to load config file {}", path.display()))?;
                log::info!("Loaded custom rates from {}", path.display());
                Ok(TaxCalculator::new(config)?)
            }
            None => Ok(TaxCalculator::for_year(self.tax_year())?),
        }
    }
}

/// Annual salary inputs
#[derive(Args, Debug)]
pub struct SalaryArgs {
    /// Annual gross salary in pounds (e.g., 60000 or 60000.50)
    #[arg(short, long, allow_hyphen_values = true)]
    gross: Decimal,

    /// Annual pre-tax deductions (e.g., salary sacrifice)
    #[arg(short, long, allow_hyphen_values = true, default_value = "0")]
    deductions: Decimal,
}

impl SalaryArgs {
    pub fn gross(&self) -> Decimal {
        self.gross
    }

    pub fn deductions(&self) -> Decimal {
        self.deductions
    }
}

/// Heading label for the rates in use
pub fn rates_label(calculator: &TaxCalculator) -> String {
    calculator
        .tax_year()
        .map_or("custom rates".to_string(), |y| y.display())
}

pub fn write_csv<I, R>(records: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = R>,
    R: serde::Serialize,
{
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for record in records.into_iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
