use crate::error::DomainError;

/// Address the pool registry answers with when no pool exists for a key.
pub const NULL_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Compares two addresses ignoring hex case.
#[must_use]
pub fn same_address(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Returns true when `address` is the registry's "no pool" sentinel.
#[must_use]
pub fn is_null_address(address: &str) -> bool {
    let hex = strip_hex_prefix(address.trim()).unwrap_or(address);
    !hex.is_empty() && hex.bytes().all(|b| b == b'0')
}

/// Checks that `address` is `0x` followed by 40 hex digits.
///
/// # Errors
/// Returns [`DomainError::InvalidAddress`] otherwise.
pub fn validate_address(address: &str) -> Result<(), DomainError> {
    let hex = strip_hex_prefix(address).ok_or_else(|| DomainError::InvalidAddress(address.to_string()))?;
    if hex.len() != 40 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DomainError::InvalidAddress(address.to_string()));
    }
    Ok(())
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}
