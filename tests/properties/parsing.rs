use crate::properties::strategies::{
	address_list_strategy, address_strategy, origin_list_strategy,
};
use alloy::primitives::Address;
use eventindexer::utils::parsing::{
	hex_to_address, is_address, parse_address_list, parse_string_list, try_parse_address,
	LIST_DELIMITER,
};
use proptest::{prelude::*, test_runner::Config};

fn join<T: ToString>(items: &[T]) -> String {
	items
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(&LIST_DELIMITER.to_string())
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_address_list_keeps_count_and_order(addresses in address_list_strategy()) {
		let parsed = parse_address_list(&join(&addresses));
		prop_assert_eq!(parsed, addresses);
	}

	#[test]
	fn test_address_list_accepts_lowercase_and_bare_hex(addresses in address_list_strategy()) {
		let bare: Vec<String> = addresses.iter().map(hex::encode).collect();
		prop_assert_eq!(parse_address_list(&join(&bare)), addresses.clone());

		let lower: Vec<String> = addresses.iter().map(|a| format!("{:#x}", a)).collect();
		prop_assert_eq!(parse_address_list(&join(&lower)), addresses);
	}

	#[test]
	fn test_string_list_round_trips(origins in origin_list_strategy()) {
		let value = join(&origins);
		let parsed = parse_string_list(&value);
		prop_assert_eq!(parsed.len(), origins.len());
		prop_assert_eq!(parsed.join(&LIST_DELIMITER.to_string()), value);
	}

	#[test]
	fn test_segment_count_matches_delimiters(value in "[a-z0-9,]{0,40}") {
		let expected = value.matches(LIST_DELIMITER).count() + 1;
		prop_assert_eq!(parse_string_list(&value).len(), expected);
		prop_assert_eq!(parse_address_list(&value).len(), expected);
	}

	#[test]
	fn test_lenient_and_strict_decoding_agree(address in address_strategy()) {
		let text = address.to_string();
		prop_assert!(is_address(&text));
		prop_assert_eq!(hex_to_address(&text), address);
		prop_assert_eq!(try_parse_address(&text).unwrap(), address);
	}

	#[test]
	fn test_lenient_decoding_never_panics(value in ".{0,64}") {
		let address = hex_to_address(&value);
		let has_foreign_char = value
			.chars()
			.any(|c| !c.is_ascii_hexdigit() && c != 'x' && c != 'X');
		if has_foreign_char {
			prop_assert_eq!(address, Address::ZERO);
		}
	}
}
