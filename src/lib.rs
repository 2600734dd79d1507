//! UK take-home pay: income tax and National Insurance by tax year.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use takehome::{Frequency, TaxCalculator, TaxYear};
//!
//! let calc = TaxCalculator::for_year(TaxYear(2023)).unwrap();
//! assert_eq!(calc.calculate_tax(dec!(60000), dec!(0)).unwrap(), dec!(11432));
//! assert_eq!(
//!     calc.calculate_national_insurance(dec!(52000), Frequency::Weekly).unwrap(),
//!     dec!(93.90)
//! );
//! ```

pub mod money;
pub mod tax;

pub use tax::*;
