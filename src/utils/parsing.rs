//! Parsing utilities
//!
//! This module provides the list parsers used to turn single delimited flag
//! values into typed collections.
//!
//! Address decoding is lenient: a segment that is not valid hex becomes the zero
//! address instead of an error. [`try_parse_address`] is the strict counterpart
//! for callers that want to know when that coercion happened.

use alloy::primitives::Address;

use crate::models::ConfigError;

/// Separator shared by every list-valued flag
pub const LIST_DELIMITER: char = ',';

const ADDRESS_LENGTH: usize = 20;

/// Splits a comma-delimited value into addresses, one per segment.
///
/// Order is preserved and duplicates are kept. An empty input still produces one
/// segment and therefore one zero address.
pub fn parse_address_list(value: &str) -> Vec<Address> {
	value.split(LIST_DELIMITER).map(hex_to_address).collect()
}

/// Splits a comma-delimited value into its verbatim segments.
///
/// Segments are neither trimmed nor validated; `""` yields `[""]`.
pub fn parse_string_list(value: &str) -> Vec<String> {
	value.split(LIST_DELIMITER).map(str::to_string).collect()
}

/// Decodes a hex string into an address without failing.
///
/// An optional `0x`/`0X` prefix is stripped and odd-length input is left-padded
/// with a `0` nibble. Inputs longer than 20 bytes keep their trailing 20 bytes,
/// shorter ones are left-padded with zeros. Anything that is not hex decodes to
/// [`Address::ZERO`].
pub fn hex_to_address(value: &str) -> Address {
	let digits = strip_hex_prefix(value);
	let decoded = if digits.len() % 2 == 1 {
		hex::decode(format!("0{}", digits))
	} else {
		hex::decode(digits)
	};

	match decoded {
		Ok(bytes) => bytes_to_address(&bytes),
		Err(_) => Address::ZERO,
	}
}

/// Whether `value` is exactly 40 hex digits after an optional `0x` prefix.
pub fn is_address(value: &str) -> bool {
	let digits = strip_hex_prefix(value);
	digits.len() == ADDRESS_LENGTH * 2 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Decodes a hex string into an address, rejecting anything but exactly 40 hex
/// digits after an optional `0x` prefix.
pub fn try_parse_address(value: &str) -> Result<Address, ConfigError> {
	let digits = strip_hex_prefix(value);
	if digits.len() != ADDRESS_LENGTH * 2 {
		return Err(ConfigError::parse_error(format!(
			"address '{}' must be {} hex digits, got {}",
			value,
			ADDRESS_LENGTH * 2,
			digits.len()
		)));
	}

	let bytes = hex::decode(digits)
		.map_err(|e| ConfigError::parse_error(format!("address '{}' is not hex: {}", value, e)))?;
	Ok(Address::from_slice(&bytes))
}

fn strip_hex_prefix(value: &str) -> &str {
	value
		.strip_prefix("0x")
		.or_else(|| value.strip_prefix("0X"))
		.unwrap_or(value)
}

fn bytes_to_address(bytes: &[u8]) -> Address {
	let len = ADDRESS_LENGTH;
	let mut out = [0u8; ADDRESS_LENGTH];
	if bytes.len() > len {
		out.copy_from_slice(&bytes[bytes.len() - len..]);
	} else {
		out[len - bytes.len()..].copy_from_slice(bytes);
	}
	Address::from(out)
}
