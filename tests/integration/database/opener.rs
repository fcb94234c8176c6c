use crate::integration::mocks::{idle_dialer, lazy_dialer, MockDialer};
use eventindexer::services::database::{
	ConnectionOpener, DatabaseError, Db, DbConnectionOpts, PoolLimits,
};
use futures::future::join_all;
use std::sync::Arc;

fn opts() -> DbConnectionOpts {
	DbConnectionOpts {
		username: "root".to_string(),
		password: "secret".to_string(),
		database: "indexer".to_string(),
		host: "db:3306".to_string(),
		max_idle_conns: 4,
		max_open_conns: 16,
		max_conn_lifetime: 300,
	}
}

#[tokio::test]
async fn test_open_dials_with_dsn_and_limits() {
	let mut dialer = MockDialer::new();
	dialer
		.expect_dial()
		.withf(|dsn, limits| {
			dsn == "mysql://root:secret@db:3306/indexer"
				&& *limits
					== PoolLimits {
						max_idle_conns: 4,
						max_open_conns: 16,
						max_conn_lifetime: 300,
					}
		})
		.times(1)
		.returning(|dsn, limits| Ok(Db::connect_lazy(dsn, limits)));

	let opener = ConnectionOpener::new(opts(), Arc::new(dialer));
	let db = opener.open().await.unwrap();

	assert_eq!(db.max_size(), 16);
}

#[tokio::test]
async fn test_each_open_dials_again() {
	let opener = ConnectionOpener::new(opts(), lazy_dialer(2));

	let first = opener.open().await.unwrap();
	let second = opener.open().await.unwrap();

	assert_eq!(first.max_size(), second.max_size());
}

#[tokio::test]
async fn test_concurrent_opens_are_independent() {
	let opener = ConnectionOpener::new(opts(), lazy_dialer(3));

	let results = join_all((0..3).map(|_| opener.open())).await;

	assert_eq!(results.len(), 3);
	assert!(results.iter().all(Result::is_ok));
}

#[tokio::test]
async fn test_dial_failure_is_returned_without_retry() {
	let mut dialer = MockDialer::new();
	dialer.expect_dial().times(1).returning(|_, _| {
		Err(DatabaseError::Connection(
			"Failed to create connection pool: access denied".to_string(),
		))
	});

	let opener = ConnectionOpener::new(opts(), Arc::new(dialer));
	let err = opener.open().await.unwrap_err();

	assert_eq!(
		err.to_string(),
		"Connection error: Failed to create connection pool: access denied"
	);
}

#[tokio::test]
async fn test_open_without_password_omits_it() {
	let mut dialer = MockDialer::new();
	dialer
		.expect_dial()
		.withf(|dsn, _| dsn == "mysql://root@db:3306/indexer")
		.times(1)
		.returning(|dsn, limits| Ok(Db::connect_lazy(dsn, limits)));

	let opener = ConnectionOpener::new(
		DbConnectionOpts {
			password: String::new(),
			..opts()
		},
		Arc::new(dialer),
	);

	assert!(opener.open().await.is_ok());
}

#[tokio::test]
async fn test_missing_username_fails_before_dialing() {
	let opener = ConnectionOpener::new(
		DbConnectionOpts {
			username: String::new(),
			..opts()
		},
		idle_dialer(),
	);

	let err = opener.open().await.unwrap_err();
	assert!(matches!(err, DatabaseError::Config(_)));
}

#[tokio::test]
async fn test_cloned_opener_shares_dialer() {
	let opener = ConnectionOpener::new(opts(), lazy_dialer(2));
	let clone = opener.clone();

	assert_eq!(clone.opts(), opener.opts());
	assert!(opener.open().await.is_ok());
	assert!(clone.open().await.is_ok());
}
