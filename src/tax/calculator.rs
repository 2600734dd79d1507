//! Salary calculator bound to one tax year's rates

use super::config::TaxYearConfig;
use super::error::{ensure_amount, TaxError};
use super::income::{self, TaxBreakdown};
use super::ni::{self, Frequency};
use super::uk::{TaxBand, TaxYear};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Calculates income tax and National Insurance for a single tax year.
///
/// The config is never modified, so one calculator can be reused for any
/// number of salaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxCalculator {
    tax_year: Option<TaxYear>,
    config: TaxYearConfig,
}

/// Period to express take-home figures over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Yearly,
    Monthly,
    Weekly,
}

impl Period {
    /// Number of these periods in a tax year
    pub fn divisor(&self) -> Decimal {
        match self {
            Period::Yearly => Decimal::ONE,
            Period::Monthly => dec!(12),
            Period::Weekly => dec!(52),
        }
    }
}

/// Annual take-home pay after income tax and National Insurance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TakeHome {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_year: Option<TaxYear>,
    pub gross: Decimal,
    pub deductions: Decimal,
    /// Personal allowance after the high income taper
    pub personal_allowance: Decimal,
    pub taxable_income: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marginal_band: Option<TaxBand>,
    pub income_tax: TaxBreakdown,
    pub national_insurance: Decimal,
    pub net: Decimal,
}

impl TakeHome {
    pub fn total_tax(&self) -> Decimal {
        self.income_tax.total()
    }

    /// Figures scaled down to one pay period
    pub fn per_period(&self, period: Period) -> TakeHomePeriod {
        let scale = |amount: Decimal| (amount / period.divisor()).round_dp(2);
        TakeHomePeriod {
            period,
            gross: scale(self.gross),
            deductions: scale(self.deductions),
            income_tax: scale(self.total_tax()),
            national_insurance: scale(self.national_insurance),
            net: scale(self.net),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TakeHomePeriod {
    pub period: Period,
    pub gross: Decimal,
    pub deductions: Decimal,
    pub income_tax: Decimal,
    pub national_insurance: Decimal,
    pub net: Decimal,
}

impl TaxCalculator {
    /// Calculator for a custom config, rejected if its thresholds are inconsistent
    pub fn new(config: TaxYearConfig) -> Result<Self, TaxError> {
        config.validate()?;
        Ok(Self { tax_year: None, config })
    }

    /// Calculator using the built-in rates for `year`
    pub fn for_year(year: TaxYear) -> Result<Self, TaxError> {
        let config = year.config().ok_or(TaxError::UnsupportedTaxYear(year))?;
        log::info!("Using {} rates", year);
        Ok(Self {
            tax_year: Some(year),
            config,
        })
    }

    pub fn tax_year(&self) -> Option<TaxYear> {
        self.tax_year
    }

    pub fn config(&self) -> &TaxYearConfig {
        &self.config
    }

    /// Total income tax owed
    pub fn calculate_tax(&self, gross: Decimal, deductions: Decimal) -> Result<Decimal, TaxError> {
        self.calculate_tax_breakdown(gross, deductions)
            .map(|breakdown| breakdown.total())
    }

    /// Income tax owed in each band
    pub fn calculate_tax_breakdown(&self, gross: Decimal, deductions: Decimal) -> Result<TaxBreakdown, TaxError> {
        let gross = ensure_amount("gross", gross)?;
        let deductions = ensure_amount("deductions", deductions)?;
        income::calculate_income_tax(&self.config, gross, deductions)
    }

    /// National Insurance owed, per year or per week
    pub fn calculate_national_insurance(&self, gross: Decimal, frequency: Frequency) -> Result<Decimal, TaxError> {
        let gross = ensure_amount("gross", gross)?;
        ni::calculate_national_insurance(&self.config, gross, frequency)
    }

    /// Pension contributions are not supported
    pub fn calculate_pension(&self) -> Result<Decimal, TaxError> {
        Err(TaxError::NotImplemented("pension contribution calculation"))
    }

    /// Highest band that any of the income is taxed in
    pub fn marginal_band(&self, gross: Decimal, deductions: Decimal) -> Result<Option<TaxBand>, TaxError> {
        let gross = ensure_amount("gross", gross)?;
        let deductions = ensure_amount("deductions", deductions)?;
        let allowance = income::effective_allowance(&self.config, gross);
        Ok(income::band_income(&self.config, allowance, gross, deductions).marginal_band())
    }

    /// Full take-home summary for an annual salary
    pub fn take_home(&self, gross: Decimal, deductions: Decimal) -> Result<TakeHome, TaxError> {
        let income_tax = self.calculate_tax_breakdown(gross, deductions)?;
        let national_insurance = self.calculate_national_insurance(gross, Frequency::Yearly)?;
        let allowance = income::effective_allowance(&self.config, gross);
        let bands = income::band_income(&self.config, allowance, gross, deductions);

        let net = gross - deductions - income_tax.total() - national_insurance;
        log::debug!("Take home {} from gross {}", net, gross);

        Ok(TakeHome {
            tax_year: self.tax_year,
            gross,
            deductions,
            personal_allowance: allowance,
            taxable_income: bands.total(),
            marginal_band: bands.marginal_band(),
            income_tax,
            national_insurance,
            net,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::error::MAX_AMOUNT;

    fn calculator(year: i32) -> TaxCalculator {
        TaxCalculator::for_year(TaxYear(year)).unwrap()
    }

    #[test]
    fn twenty_twenty_two_tax() {
        let calc = calculator(2023);
        assert_eq!(calc.calculate_tax(dec!(20000), Decimal::ZERO), Ok(dec!(1486)));
        assert_eq!(calc.calculate_tax(dec!(60000), Decimal::ZERO), Ok(dec!(11432)));
        assert_eq!(calc.calculate_tax(dec!(200000), Decimal::ZERO), Ok(dec!(74960)));
    }

    #[test]
    fn breakdown_sums_to_total() {
        let calc = calculator(2023);
        let breakdown = calc.calculate_tax_breakdown(dec!(200000), Decimal::ZERO).unwrap();
        assert_eq!(calc.calculate_tax(dec!(200000), Decimal::ZERO), Ok(breakdown.total()));

        let json = serde_json::to_value(breakdown).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["additional_tax", "basic_tax", "higher_tax"]);
    }

    #[test]
    fn repeated_calculations_are_independent() {
        let calc = calculator(2024);
        let before = calc.calculate_tax(dec!(40000), Decimal::ZERO).unwrap();
        // A tapered calculation must not shrink the allowance for the next call
        calc.calculate_tax(dec!(130000), Decimal::ZERO).unwrap();
        calc.calculate_tax_breakdown(dec!(110000), dec!(1000)).unwrap();
        assert_eq!(calc.calculate_tax(dec!(40000), Decimal::ZERO), Ok(before));
        assert_eq!(calc.config().personal_allowance, dec!(12570));
    }

    #[test]
    fn negative_inputs_rejected() {
        let calc = calculator(2025);
        assert_eq!(
            calc.calculate_tax(dec!(-1), Decimal::ZERO),
            Err(TaxError::NegativeAmount {
                field: "gross",
                value: dec!(-1)
            })
        );
        assert_eq!(
            calc.calculate_tax_breakdown(dec!(1000), dec!(-5)),
            Err(TaxError::NegativeAmount {
                field: "deductions",
                value: dec!(-5)
            })
        );
        assert!(calc.calculate_national_insurance(dec!(-0.01), Frequency::Yearly).is_err());
        assert!(calc.take_home(dec!(-100), Decimal::ZERO).is_err());
    }

    #[test]
    fn oversized_inputs_rejected() {
        let calc = calculator(2023);
        let huge = dec!(10000000000000000000000000000);
        assert_eq!(
            calc.calculate_tax(Decimal::MAX / dec!(2), Decimal::ZERO),
            Err(TaxError::AmountTooLarge {
                field: "gross",
                value: Decimal::MAX / dec!(2)
            })
        );
        assert_eq!(
            calc.take_home(huge, Decimal::ZERO),
            Err(TaxError::AmountTooLarge {
                field: "gross",
                value: huge
            })
        );
        assert_eq!(
            calc.calculate_tax_breakdown(dec!(60000), huge),
            Err(TaxError::AmountTooLarge {
                field: "deductions",
                value: huge
            })
        );
        assert!(calc.calculate_national_insurance(huge, Frequency::Weekly).is_err());
        assert!(calc.marginal_band(huge, Decimal::ZERO).is_err());

        // The cap itself is still calculated
        let summary = calc.take_home(MAX_AMOUNT, Decimal::ZERO).unwrap();
        assert_eq!(summary.personal_allowance, Decimal::ZERO);
        assert_eq!(summary.marginal_band, Some(TaxBand::Additional));
        assert!(summary.net > Decimal::ZERO);
    }

    #[test]
    fn pension_not_implemented() {
        let calc = calculator(2025);
        assert_eq!(
            calc.calculate_pension(),
            Err(TaxError::NotImplemented("pension contribution calculation"))
        );
    }

    #[test]
    fn unsupported_year() {
        assert_eq!(
            TaxCalculator::for_year(TaxYear(2019)),
            Err(TaxError::UnsupportedTaxYear(TaxYear(2019)))
        );
    }

    #[test]
    fn custom_config_validated() {
        let config = TaxYearConfig {
            basic_rate: dec!(1000),
            ..*calculator(2025).config()
        };
        assert!(matches!(TaxCalculator::new(config), Err(TaxError::InvalidConfig(_))));

        let calc = TaxCalculator::new(*calculator(2025).config()).unwrap();
        assert_eq!(calc.tax_year(), None);
        assert_eq!(calc.calculate_tax(dec!(60000), Decimal::ZERO), Ok(dec!(11432)));
    }

    #[test]
    fn take_home_for_2022_23() {
        let summary = calculator(2023).take_home(dec!(60000), Decimal::ZERO).unwrap();
        assert_eq!(summary.tax_year, Some(TaxYear(2023)));
        assert_eq!(summary.personal_allowance, dec!(12570));
        assert_eq!(summary.taxable_income, dec!(47430));
        assert_eq!(summary.marginal_band, Some(TaxBand::Higher));
        assert_eq!(summary.total_tax(), dec!(11432));
        // 1153.85 a week: 777 * 12% + 186.85 * 2%, times 52
        assert_eq!(summary.national_insurance, dec!(5042.80));
        assert_eq!(summary.net, dec!(43525.20));
    }

    #[test]
    fn take_home_with_taper() {
        let summary = calculator(2024).take_home(dec!(125140), Decimal::ZERO).unwrap();
        assert_eq!(summary.personal_allowance, Decimal::ZERO);
        assert_eq!(summary.taxable_income, dec!(125140));
        assert_eq!(summary.marginal_band, Some(TaxBand::Higher));
    }

    #[test]
    fn take_home_per_period() {
        let summary = calculator(2023).take_home(dec!(60000), Decimal::ZERO).unwrap();
        let monthly = summary.per_period(Period::Monthly);
        assert_eq!(monthly.gross, dec!(5000));
        assert_eq!(monthly.income_tax, dec!(952.67));
        assert_eq!(monthly.net, dec!(3627.10));

        let yearly = summary.per_period(Period::Yearly);
        assert_eq!(yearly.net, summary.net);
    }

    #[test]
    fn marginal_band_for_low_income() {
        let calc = calculator(2025);
        assert_eq!(calc.marginal_band(dec!(12000), Decimal::ZERO), Ok(None));
        assert_eq!(calc.marginal_band(dec!(130000), Decimal::ZERO), Ok(Some(TaxBand::Additional)));
    }
}
