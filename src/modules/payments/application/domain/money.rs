use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    SubCentRemainder,
    OutOfRange,
}

/// Convert a decimal amount to the provider's minor-unit integer (cents).
/// Stays in decimal arithmetic the whole way; an amount that does not land
/// exactly on a cent is refused rather than rounded.
pub fn to_minor_units(amount: Decimal) -> Result<i64, MoneyError> {
    let scaled = amount * Decimal::from(100);

    if !scaled.fract().is_zero() {
        return Err(MoneyError::SubCentRemainder);
    }

    scaled.trunc().to_i64().ok_or(MoneyError::OutOfRange)
}
