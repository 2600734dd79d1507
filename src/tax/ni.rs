use super::config::TaxYearConfig;
use super::error::{checked_mul, TaxError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::str::FromStr;

const WEEKS_PER_YEAR: Decimal = dec!(52);

/// Period a National Insurance figure is reported for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Yearly,
    Weekly,
}

/// Only the exact lowercase names `yearly` and `weekly` are accepted
impl FromStr for Frequency {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yearly" => Ok(Frequency::Yearly),
            "weekly" => Ok(Frequency::Weekly),
            _ => Err(TaxError::UnknownFrequency(s.to_string())),
        }
    }
}

/// Annual gross pay as a weekly figure, to the penny
pub fn weekly_earnings(gross: Decimal) -> Decimal {
    (gross / WEEKS_PER_YEAR).round_dp(2)
}

/// Unrounded weekly contribution for the given weekly earnings
pub fn weekly_contribution(config: &TaxYearConfig, weekly: Decimal) -> Result<Decimal, TaxError> {
    let lower = config.lower_earnings_limit_ni;
    let upper = config.upper_earnings_limit_ni;

    if weekly < lower {
        Ok(Decimal::ZERO)
    } else if weekly < upper {
        checked_mul("weekly earnings", weekly - lower, config.national_insurance_rate_lower)
    } else {
        let below_upper = checked_mul("weekly earnings", upper - lower, config.national_insurance_rate_lower)?;
        let above_upper = checked_mul("weekly earnings", weekly - upper, config.national_insurance_rate_upper)?;
        below_upper
            .checked_add(above_upper)
            .ok_or(TaxError::AmountTooLarge {
                field: "weekly earnings",
                value: weekly,
            })
    }
}

/// Calculate National Insurance owed on an annual gross salary
pub fn calculate_national_insurance(
    config: &TaxYearConfig,
    gross: Decimal,
    frequency: Frequency,
) -> Result<Decimal, TaxError> {
    let weekly = weekly_earnings(gross);
    let ni = weekly_contribution(config, weekly)?;
    log::debug!("Weekly earnings {}: NI {}", weekly, ni);

    match frequency {
        Frequency::Yearly => Ok(checked_mul("weekly contribution", ni, WEEKS_PER_YEAR)?.round_dp(2)),
        Frequency::Weekly => Ok(ni.round_dp(2)),
    }
}
