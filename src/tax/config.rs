use super::error::{TaxError, MAX_AMOUNT};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Rates and thresholds for a single tax year.
///
/// Income thresholds are annual amounts; the National Insurance earnings
/// limits are weekly. Income tax percentages are whole numbers (20 = 20%)
/// while National Insurance rates are fractions (0.12 = 12%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TaxYearConfig {
    /// Income below which no tax is owed
    #[schemars(with = "f64")]
    pub personal_allowance: Decimal,
    /// Income above which the personal allowance is withdrawn (£1 for every £2)
    #[schemars(with = "f64")]
    pub personal_allowance_upper: Decimal,
    /// Upper bound of the basic rate band
    #[schemars(with = "f64")]
    pub basic_rate: Decimal,
    /// Upper bound of the higher rate band
    #[schemars(with = "f64")]
    pub higher_rate: Decimal,
    #[schemars(with = "f64")]
    pub basic_rate_percentage: Decimal,
    #[schemars(with = "f64")]
    pub higher_rate_percentage: Decimal,
    #[schemars(with = "f64")]
    pub additional_rate_percentage: Decimal,
    /// NI rate between the lower and upper earnings limits
    #[schemars(with = "f64")]
    pub national_insurance_rate_lower: Decimal,
    /// NI rate above the upper earnings limit
    #[schemars(with = "f64")]
    pub national_insurance_rate_upper: Decimal,
    /// Weekly earnings below which no NI is due
    #[schemars(with = "f64")]
    pub lower_earnings_limit_ni: Decimal,
    /// Weekly earnings above which the upper NI rate applies
    #[schemars(with = "f64")]
    pub upper_earnings_limit_ni: Decimal,
}

impl TaxYearConfig {
    /// Read a config from JSON and check its invariants
    pub fn read_json<R: Read>(reader: R) -> Result<Self, TaxError> {
        let config: TaxYearConfig = serde_json::from_reader(reader)
            .map_err(|e| TaxError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TaxError> {
        let fields = [
            ("personal_allowance", self.personal_allowance),
            ("personal_allowance_upper", self.personal_allowance_upper),
            ("basic_rate", self.basic_rate),
            ("higher_rate", self.higher_rate),
            ("basic_rate_percentage", self.basic_rate_percentage),
            ("higher_rate_percentage", self.higher_rate_percentage),
            ("additional_rate_percentage", self.additional_rate_percentage),
            ("national_insurance_rate_lower", self.national_insurance_rate_lower),
            ("national_insurance_rate_upper", self.national_insurance_rate_upper),
            ("lower_earnings_limit_ni", self.lower_earnings_limit_ni),
            ("upper_earnings_limit_ni", self.upper_earnings_limit_ni),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(TaxError::InvalidConfig(format!("{name} must not be negative, got {value}")));
        }
        if let Some((name, value)) = fields.iter().find(|(_, v)| *v > MAX_AMOUNT) {
            return Err(TaxError::InvalidConfig(format!("{name} must not exceed {MAX_AMOUNT}, got {value}")));
        }

        if self.personal_allowance_upper < self.personal_allowance {
            return Err(TaxError::InvalidConfig(format!(
                "personal_allowance_upper ({}) is below personal_allowance ({})",
                self.personal_allowance_upper, self.personal_allowance
            )));
        }
        if self.basic_rate <= self.personal_allowance {
            return Err(TaxError::InvalidConfig(format!(
                "basic_rate ({}) must exceed personal_allowance ({})",
                self.basic_rate, self.personal_allowance
            )));
        }
        if self.higher_rate <= self.basic_rate {
            return Err(TaxError::InvalidConfig(format!(
                "higher_rate ({}) must exceed basic_rate ({})",
                self.higher_rate, self.basic_rate
            )));
        }
        if self.upper_earnings_limit_ni < self.lower_earnings_limit_ni {
            return Err(TaxError::InvalidConfig(format!(
                "upper_earnings_limit_ni ({}) is below lower_earnings_limit_ni ({})",
                self.upper_earnings_limit_ni, self.lower_earnings_limit_ni
            )));
        }
        Ok(())
    }

    /// Width of the basic rate band, fixed regardless of any allowance taper
    pub fn basic_band_width(&self) -> Decimal {
        self.basic_rate - self.personal_allowance
    }

    /// Gross income at which the personal allowance is fully withdrawn
    pub fn taper_floor(&self) -> Decimal {
        self.personal_allowance_upper + self.personal_allowance * Decimal::TWO
    }
}
