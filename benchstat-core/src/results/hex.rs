use num_bigint::{BigUint, ParseBigIntError};
use num_traits::Num;

/// Why a field could not be read as base-16.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    Empty,
    Signed,
    Invalid(ParseBigIntError),
}

/// Parses an unsigned base-16 integer of any width as the benchmark firmware prints it.
///
/// Surrounding whitespace is ignored and a `0x`/`0X` prefix is optional, so both
/// `0x000000000000001e` and `1e` read as 30.
pub fn parse_hex(text: &str) -> Result<BigUint, HexError> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() {
        return Err(HexError::Empty);
    }
    // from_str_radix would accept a leading '+'
    if digits.starts_with(['+', '-']) {
        return Err(HexError::Signed);
    }

    BigUint::from_str_radix(digits, 16).map_err(HexError::Invalid)
}
