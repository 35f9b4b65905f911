use crate::error::DomainError;
use crate::math::fixed_point::ratio_to_decimal;
use crate::value_objects::price::Price;
use primitive_types::{U256, U512};
use rust_decimal::Decimal;

/// Fractional bits of a Q64.96 number.
pub const Q96_BITS: usize = 96;

/// Converts a pool's `sqrtPriceX96` into a spot price.
///
/// price = sqrtPriceX96² / 2^192, i.e. token1 per token0.
/// With `invert` set the reciprocal (token0 per token1) is returned.
/// A zero price stays zero in both orientations.
///
/// The square is taken in 512-bit arithmetic so no `uint160` input can
/// overflow.
///
/// # Errors
/// Returns [`DomainError::DecimalOverflow`] when the result does not fit a decimal.
pub fn price_from_sqrt_price_x96(sqrt_price_x96: U256, invert: bool) -> Result<Price, DomainError> {
    let squared: U512 = sqrt_price_x96.full_mul(sqrt_price_x96);
    if squared.is_zero() {
        return Ok(Price::new(Decimal::ZERO));
    }

    let q192 = U512::one() << (2 * Q96_BITS);
    let value = if invert {
        ratio_to_decimal(q192, squared)
    } else {
        ratio_to_decimal(squared, q192)
    };

    value
        .map(Price::new)
        .ok_or(DomainError::DecimalOverflow("pool price"))
}
