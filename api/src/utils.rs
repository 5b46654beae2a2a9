use num_bigint::BigUint;
use crate::consts::*;

/// Helper: convert a slice to a fixed-size array padded with zeros
pub fn padded_array<const N: usize>(input: &[u8]) -> [u8; N] {
    assert!(input.len() <= N, "input too long");
    let mut out = [0u8; N];
    out[..input.len()].copy_from_slice(input);
    out
}

/// Helper: convert a display name to a fixed-size array
pub fn to_name(val: &str) -> [u8; NAME_LEN] {
    assert!(val.len() <= NAME_LEN, "name too long");
    padded_array::<NAME_LEN>(val.as_bytes())
}

/// Helper: convert a fixed-size name array back to a string
pub fn from_name(val: &[u8; NAME_LEN]) -> String {
    let end = val.iter().position(|&x| x == 0).unwrap_or(NAME_LEN);
    String::from_utf8_lossy(&val[..end]).into_owned()
}

/// Helper: encode an amount as a little-endian 256-bit word
pub fn to_word(val: &BigUint) -> [u8; WORD_LEN] {
    let bytes = val.to_bytes_le();
    assert!(bytes.len() <= WORD_LEN, "amount too large");
    padded_array::<WORD_LEN>(&bytes)
}

/// Helper: decode a little-endian 256-bit word into an amount
pub fn from_word(val: &[u8; WORD_LEN]) -> BigUint {
    BigUint::from_bytes_le(val)
}
