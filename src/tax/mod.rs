pub mod calculator;
pub mod config;
pub mod error;
pub mod income;
pub mod ni;
pub mod uk;

pub use calculator::{Period, TakeHome, TakeHomePeriod, TaxCalculator};
pub use config::TaxYearConfig;
pub use error::{TaxError, MAX_AMOUNT};
pub use income::{calculate_income_tax, effective_allowance, BandIncome, TaxBreakdown};
pub use ni::{calculate_national_insurance, Frequency};
pub use uk::{TaxBand, TaxYear};
