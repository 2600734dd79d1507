use super::uk::TaxYear;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Largest salary or deduction accepted, £1 trillion.
///
/// Every rate is applied to amounts at most this size, which keeps the
/// arithmetic well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TaxError {
    #[error("{field} must not be negative: {value}")]
    NegativeAmount { field: &'static str, value: Decimal },
    #[error("{field} must not exceed {max}: {value}", max = MAX_AMOUNT)]
    AmountTooLarge { field: &'static str, value: Decimal },
    #[error("unknown frequency '{0}', expected 'yearly' or 'weekly'")]
    UnknownFrequency(String),
    #[error("no rates configured for tax year {0}")]
    UnsupportedTaxYear(TaxYear),
    #[error("invalid tax year '{0}', expected e.g. 2025 or 2024/25")]
    InvalidTaxYear(String),
    #[error("invalid tax year config: {0}")]
    InvalidConfig(String),
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Reject negative or oversized monetary inputs
pub(crate) fn ensure_amount(field: &'static str, value: Decimal) -> Result<Decimal, TaxError> {
    if value < Decimal::ZERO {
        Err(TaxError::NegativeAmount { field, value })
    } else if value > MAX_AMOUNT {
        Err(TaxError::AmountTooLarge { field, value })
    } else {
        Ok(value)
    }
}

/// Multiply, reporting overflow against `field` instead of panicking
pub(crate) fn checked_mul(field: &'static str, lhs: Decimal, rhs: Decimal) -> Result<Decimal, TaxError> {
    lhs.checked_mul(rhs)
        .ok_or(TaxError::AmountTooLarge { field, value: lhs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_within_range() {
        assert_eq!(ensure_amount("gross", Decimal::ZERO), Ok(Decimal::ZERO));
        assert_eq!(ensure_amount("gross", MAX_AMOUNT), Ok(MAX_AMOUNT));
        assert_eq!(
            ensure_amount("gross", dec!(-0.01)),
            Err(TaxError::NegativeAmount {
                field: "gross",
                value: dec!(-0.01)
            })
        );
        assert_eq!(
            ensure_amount("deductions", MAX_AMOUNT + dec!(0.01)),
            Err(TaxError::AmountTooLarge {
                field: "deductions",
                value: MAX_AMOUNT + dec!(0.01)
            })
        );
    }

    #[test]
    fn overflow_reported() {
        assert_eq!(checked_mul("gross", dec!(3), dec!(4)), Ok(dec!(12)));
        assert_eq!(
            checked_mul("gross", Decimal::MAX, dec!(2)),
            Err(TaxError::AmountTooLarge {
                field: "gross",
                value: Decimal::MAX
            })
        );
    }

    #[test]
    fn too_large_message() {
        let err = TaxError::AmountTooLarge {
            field: "gross",
            value: dec!(10000000000000000000000000000),
        };
        assert_eq!(
            err.to_string(),
            "gross must not exceed 1000000000000: 10000000000000000000000000000"
        );
    }
}
