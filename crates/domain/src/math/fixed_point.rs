use primitive_types::U512;
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest scale a decimal supports.
const MAX_SCALE: u32 = 28;
/// Bits in a decimal mantissa.
const MANTISSA_BITS: usize = 96;

/// Converts `numerator / denominator` to a decimal, keeping as many
/// fractional digits as fit in the 96-bit mantissa.
///
/// Returns `None` when the denominator is zero or the integer part alone
/// does not fit.
pub fn ratio_to_decimal(numerator: U512, denominator: U512) -> Option<Decimal> {
    if denominator.is_zero() {
        return None;
    }
    if numerator.is_zero() {
        return Some(Decimal::ZERO);
    }

    // Try the finest scale first; the quotient only shrinks as scale drops.
    for scale in (0..=MAX_SCALE).rev() {
        let scaled = numerator.checked_mul(U512::exp10(scale as usize))?;
        let quotient = scaled / denominator;
        if quotient.bits() <= MANTISSA_BITS {
            let mantissa = i128::try_from(quotient.as_u128()).ok()?;
            return Decimal::try_from_i128_with_scale(mantissa, scale)
                .ok()
                .map(|d| d.normalize());
        }
    }

    None
}

/// Rounds half away from zero to `dp` places and pads with zeros.
#[must_use]
pub fn format_fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}
