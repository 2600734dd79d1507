use super::config::TaxYearConfig;
use super::error::TaxError;
use chrono::{Datelike, NaiveDate};
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

/// Income tax band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxBand {
    #[default]
    Basic,
    Higher,
    Additional,
}

impl TaxBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxBand::Basic => "basic",
            TaxBand::Higher => "higher",
            TaxBand::Additional => "additional",
        }
    }
}

impl std::fmt::Display for TaxBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// UK Tax Year (runs 6 April to 5 April)
/// The year value represents the end year (e.g., 2025 = 2024/25 tax year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TaxYear(pub i32);

impl TaxYear {
    /// Years with a built-in configuration, oldest first
    pub const SUPPORTED: [TaxYear; 4] = [TaxYear(2023), TaxYear(2024), TaxYear(2025), TaxYear(2026)];

    /// Create a tax year from a date
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        // 6 April onwards belongs to the tax year ending next April
        match NaiveDate::from_ymd_opt(year, 4, 6) {
            Some(start) if date >= start => TaxYear(year + 1),
            _ => TaxYear(year),
        }
    }

    /// Tax year containing today's local date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// Start date of the tax year (6 April of previous year)
    pub fn start_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0 - 1, 4, 6)
    }

    /// End date of the tax year (5 April)
    pub fn end_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.0, 4, 5)
    }

    /// Display as "2024/25" format
    pub fn display(&self) -> String {
        format!("{}/{:02}", self.0 - 1, self.0 % 100)
    }

    pub fn supported() -> &'static [TaxYear] {
        &Self::SUPPORTED
    }

    /// Most recent year with built-in rates
    pub fn latest() -> TaxYear {
        Self::SUPPORTED[Self::SUPPORTED.len() - 1]
    }

    /// Built-in rates and thresholds for this tax year
    pub fn config(&self) -> Option<TaxYearConfig> {
        let config = match self.0 {
            2023 => TaxYearConfig {
                personal_allowance: dec!(12570),
                personal_allowance_upper: dec!(100000),
                basic_rate: dec!(50270),
                higher_rate: dec!(150000),
                basic_rate_percentage: dec!(20),
                higher_rate_percentage: dec!(40),
                additional_rate_percentage: dec!(45),
                national_insurance_rate_lower: dec!(0.12),
                national_insurance_rate_upper: dec!(0.02),
                lower_earnings_limit_ni: dec!(190),
                upper_earnings_limit_ni: dec!(967),
            },
            // Additional rate threshold drops to £125,140
            2024 => TaxYearConfig {
                higher_rate: dec!(125140),
                lower_earnings_limit_ni: dec!(242),
                ..TaxYear(2023).config()?
            },
            // Employee main rate cut to 8%
            2025 | 2026 => TaxYearConfig {
                national_insurance_rate_lower: dec!(0.08),
                ..TaxYear(2024).config()?
            },
            _ => return None,
        };
        Some(config)
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Accepts either the end year ("2025") or the span ("2024/25")
impl FromStr for TaxYear {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || TaxError::InvalidTaxYear(s.to_string());

        match s.split_once('/') {
            None => s.parse::<i32>().map(TaxYear).map_err(|_| invalid()),
            Some((start, end)) => {
                let start: i32 = start.parse().map_err(|_| invalid())?;
                let end: i32 = end.parse().map_err(|_| invalid())?;
                let year = TaxYear(start + 1);
                if end == year.0 % 100 || end == year.0 {
                    Ok(year)
                } else {
                    Err(invalid())
                }
            }
        }
    }
}
