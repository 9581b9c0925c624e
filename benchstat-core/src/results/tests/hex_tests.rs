use crate::results::{HexError, parse_hex};
use num_bigint::BigUint;

fn big(value: u128) -> BigUint {
    BigUint::from(value)
}

#[test]
fn parses_bare_digits() {
    assert_eq!(parse_hex("1e"), Ok(big(30)));
    assert_eq!(parse_hex("0"), Ok(big(0)));
    assert_eq!(parse_hex("DeadBeef"), Ok(big(0xdead_beef)));
}

#[test]
fn parses_firmware_padded_form() {
    assert_eq!(parse_hex("0x000000000000001e"), Ok(big(30)));
    assert_eq!(parse_hex("0X1F4"), Ok(big(500)));
}

#[test]
fn ignores_surrounding_whitespace() {
    assert_eq!(parse_hex(" \t0x10 "), Ok(big(16)));
}

#[test]
fn accepts_values_wider_than_64_bits() {
    // sum of squares of large cycle counts can exceed u64
    assert_eq!(parse_hex("100000000000000000"), Ok(big(1 << 68)));
    assert_eq!(parse_hex("ffffffffffffffffffffffffffffffff"), Ok(big(u128::MAX)));
}

#[test]
fn rejects_empty() {
    assert_eq!(parse_hex(""), Err(HexError::Empty));
    assert_eq!(parse_hex("0x"), Err(HexError::Empty));
    assert_eq!(parse_hex("   "), Err(HexError::Empty));
}

#[test]
fn rejects_signs() {
    assert_eq!(parse_hex("-1"), Err(HexError::Signed));
    assert_eq!(parse_hex("+1"), Err(HexError::Signed));
    assert_eq!(parse_hex("0x-1"), Err(HexError::Signed));
}

#[test]
fn rejects_non_hex_digits() {
    assert!(matches!(parse_hex("12g"), Err(HexError::Invalid(_))));
    assert!(matches!(parse_hex("1 2"), Err(HexError::Invalid(_))));
}

#[test]
fn accepts_values_wider_than_128_bits() {
    // Act
    let value = parse_hex("1ffffffffffffffffffffffffffffffff").unwrap();

    // Assert
    assert_eq!(value, (big(u128::MAX) << 1u32) + 1u32);
    assert_eq!(value.bits(), 129);
}
