use crate::integration::mocks::{
	default_flag_source, default_string, lazy_dialer, MockDialer, MockFlagSource,
};
use eventindexer::{
	bootstrap::{initialize_config, open_database},
	models::flags,
	services::database::DatabaseError,
};
use std::sync::Arc;

#[tokio::test]
async fn test_initialize_then_open_database() {
	let config = initialize_config(&default_flag_source(), Some(lazy_dialer(1))).unwrap();

	let db = open_database(&config).await.unwrap();
	assert_eq!(db.max_size(), 200);
	assert_eq!(db.pool_state(), (0, 0));
}

#[tokio::test]
async fn test_open_database_reports_dial_failure() {
	let mut dialer = MockDialer::new();
	dialer
		.expect_dial()
		.times(1)
		.returning(|_, _| Err(DatabaseError::Pool("timed out".to_string())));

	let config = initialize_config(&default_flag_source(), Some(Arc::new(dialer))).unwrap();

	let err = open_database(&config).await.unwrap_err();
	assert_eq!(err.to_string(), "Pool error: timed out");
}

#[test]
fn test_initialize_config_surfaces_validation_error() {
	let mut source = MockFlagSource::new();
	source.expect_string().returning(|name| {
		Ok(match name {
			flags::SYNC_MODE => "rewind".to_string(),
			other => default_string(other).to_string(),
		})
	});
	source.expect_uint64().returning(|_| Ok(0));
	source.expect_boolean().returning(|_| Ok(false));

	let err = initialize_config(&source, None).unwrap_err();
	assert!(err.to_string().contains("rewind"));
}
