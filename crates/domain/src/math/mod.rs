/// Exact integer ratios converted to decimals.
pub mod fixed_point;
/// Q64.96 square-root price conversion.
pub mod sqrt_price;
