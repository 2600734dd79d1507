use super::config::TaxYearConfig;
use super::error::{checked_mul, TaxError};
use super::uk::TaxBand;
use rust_decimal::Decimal;
use serde::Serialize;

/// Income falling into each tax band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BandIncome {
    pub basic: Decimal,
    pub higher: Decimal,
    pub additional: Decimal,
}

impl BandIncome {
    pub fn total(&self) -> Decimal {
        self.basic + self.higher + self.additional
    }

    /// Highest band that any income falls into
    pub fn marginal_band(&self) -> Option<TaxBand> {
        if self.additional > Decimal::ZERO {
            Some(TaxBand::Additional)
        } else if self.higher > Decimal::ZERO {
            Some(TaxBand::Higher)
        } else if self.basic > Decimal::ZERO {
            Some(TaxBand::Basic)
        } else {
            None
        }
    }
}

/// Income tax owed in each band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaxBreakdown {
    pub basic_tax: Decimal,
    pub higher_tax: Decimal,
    pub additional_tax: Decimal,
}

impl TaxBreakdown {
    pub fn total(&self) -> Decimal {
        self.basic_tax + self.higher_tax + self.additional_tax
    }

    pub fn get(&self, band: TaxBand) -> Decimal {
        match band {
            TaxBand::Basic => self.basic_tax,
            TaxBand::Higher => self.higher_tax,
            TaxBand::Additional => self.additional_tax,
        }
    }
}

/// Personal allowance after the high income taper.
///
/// Above `personal_allowance_upper` the allowance is reduced by half of the
/// excess, bottoming out at zero.
pub fn effective_allowance(config: &TaxYearConfig, gross: Decimal) -> Decimal {
    if gross <= config.personal_allowance_upper {
        return config.personal_allowance;
    }
    let reduction = (gross - config.personal_allowance_upper) / Decimal::TWO;
    (config.personal_allowance - reduction).max(Decimal::ZERO)
}

/// Split income across the tax bands.
///
/// The basic band keeps its full width when the allowance is tapered, so the
/// lost allowance pushes income up into the higher band. The additional rate
/// threshold applies to income after deductions.
pub fn band_income(config: &TaxYearConfig, allowance: Decimal, gross: Decimal, deductions: Decimal) -> BandIncome {
    let income = gross - deductions;
    let basic_width = config.basic_band_width();

    let basic = (income - allowance).min(basic_width);
    let higher = (income - allowance - basic_width).min(config.higher_rate - allowance - basic_width);
    let additional = income - config.higher_rate;

    BandIncome {
        basic: basic.max(Decimal::ZERO),
        higher: higher.max(Decimal::ZERO),
        additional: additional.max(Decimal::ZERO),
    }
}

fn tax_at(amount: Decimal, percentage: Decimal) -> Result<Decimal, TaxError> {
    let tax = checked_mul("taxable income", amount, percentage)? / Decimal::ONE_HUNDRED;
    Ok(tax.round_dp(2))
}

/// Calculate income tax owed in each band
pub fn calculate_income_tax(
    config: &TaxYearConfig,
    gross: Decimal,
    deductions: Decimal,
) -> Result<TaxBreakdown, TaxError> {
    let allowance = effective_allowance(config, gross);
    let bands = band_income(config, allowance, gross, deductions);

    log::debug!(
        "Gross {} deductions {}: allowance {}, bands {}/{}/{}",
        gross,
        deductions,
        allowance,
        bands.basic,
        bands.higher,
        bands.additional
    );

    Ok(TaxBreakdown {
        basic_tax: tax_at(bands.basic, config.basic_rate_percentage)?,
        higher_tax: tax_at(bands.higher, config.higher_rate_percentage)?,
        additional_tax: tax_at(bands.additional, config.additional_rate_percentage)?,
    })
}
