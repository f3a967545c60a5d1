//! Transaction semantics over the scripted mock driver.

mod common;

use common::{MockConnection, Script};
use sqlbulk::{Bulk, BulkError, Context, Dialect, Value};

const INSERT_T: &str = "insert into t (a,b) values (?,?)";

fn rows(n: usize) -> Vec<(i64, i64)> {
    (0..n as i64).map(|i| (i, i * 10)).collect()
}

#[test]
fn all_chunks_commit_in_one_transaction() {
    let (conn, journal) = MockConnection::new(Script::default());
    // ceiling 8 over 2-field rows: 6 rows chunk to [3,3].
    let mut bulk = Bulk::with_connection(Dialect::MySQL, conn).max_placeholders(8);
    let rows = rows(6);

    let expected = bulk.statements(INSERT_T, &rows).unwrap();
    bulk.bulk_insert(&Context::background(), INSERT_T, &rows)
        .unwrap();

    let journal = journal.borrow();
    assert_eq!(journal.begun, 1);
    assert!(journal.committed);
    assert!(!journal.rolled_back);
    assert_eq!(journal.executed.len(), 2);
    for (executed, expected) in journal.executed.iter().zip(&expected) {
        assert_eq!(executed.0, expected.sql);
        assert_eq!(executed.1, expected.params);
    }
}

#[test]
fn first_execution_failure_rolls_back_and_stops() {
    let (conn, journal) = MockConnection::new(Script {
        fail_at: Some(1),
        ..Script::default()
    });
    // ceiling 4 over 2-field rows: 6 rows chunk to six single-row statements.
    let mut bulk = Bulk::with_connection(Dialect::MySQL, conn).max_placeholders(4);
    let rows = rows(6);

    let err = bulk
        .bulk_insert(&Context::background(), INSERT_T, &rows)
        .unwrap_err();

    assert!(matches!(err, BulkError::Transaction(ref msg) if msg.contains("execution")));
    let journal = journal.borrow();
    assert_eq!(journal.executed.len(), 1);
    assert!(journal.rolled_back);
    assert!(!journal.committed);
}

#[test]
fn begin_failure_is_a_transaction_error() {
    let (conn, journal) = MockConnection::new(Script {
        fail_begin: true,
        ..Script::default()
    });
    let mut bulk = Bulk::with_connection(Dialect::MySQL, conn);

    let err = bulk
        .bulk_insert(&Context::background(), INSERT_T, &rows(2))
        .unwrap_err();

    assert!(matches!(err, BulkError::Transaction(ref msg) if msg.contains("starting")));
    let journal = journal.borrow();
    assert_eq!(journal.begun, 0);
    assert!(journal.executed.is_empty());
}

#[test]
fn commit_failure_is_a_transaction_error() {
    let (conn, journal) = MockConnection::new(Script {
        fail_commit: true,
        ..Script::default()
    });
    let mut bulk = Bulk::with_connection(Dialect::MySQL, conn);

    let err = bulk
        .bulk_insert(&Context::background(), INSERT_T, &rows(2))
        .unwrap_err();

    assert!(matches!(err, BulkError::Transaction(ref msg) if msg.contains("commit")));
    let journal = journal.borrow();
    assert_eq!(journal.executed.len(), 1);
    assert!(!journal.committed);
    assert!(!journal.rolled_back);
}

#[test]
fn connectionless_instance_reports_connection_error() {
    let mut bulk = Bulk::<MockConnection>::new(Dialect::MySQL);

    let err = bulk
        .bulk_insert(&Context::background(), INSERT_T, &rows(3))
        .unwrap_err();

    assert!(matches!(err, BulkError::Connection(_)));
}

#[test]
fn invalid_input_wins_over_missing_connection() {
    let mut bulk = Bulk::<MockConnection>::new(Dialect::MySQL);
    let no_rows: Vec<(i64, i64)> = Vec::new();

    assert!(matches!(
        bulk.bulk_insert(&Context::background(), INSERT_T, &no_rows),
        Err(BulkError::InvalidRequest(_))
    ));
}

#[test]
fn context_is_passed_through_uninterpreted() {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;

    let (conn, journal) = MockConnection::new(Script::default());
    let mut bulk = Bulk::with_connection(Dialect::MySQL, conn).max_placeholders(8);

    // The mock ignores cancellation; the core must not act on it either.
    let flag = Arc::new(AtomicBool::new(true));
    let ctx = Context::background().with_cancellation(flag);
    bulk.bulk_insert(&ctx, INSERT_T, &rows(6)).unwrap();

    let journal = journal.borrow();
    assert_eq!(journal.ctx_cancelled, vec![true, true]);
    assert!(journal.committed);
}

#[test]
fn oracle_statements_reach_the_driver_numbered() {
    let (conn, journal) = MockConnection::new(Script::default());
    let mut bulk = Bulk::with_connection(Dialect::Oracle, conn);

    bulk.bulk_insert(&Context::background(), INSERT_T, &[(7i64, 70i64)])
        .unwrap();

    let journal = journal.borrow();
    assert_eq!(
        journal.executed[0].0,
        "insert all into t (a,b) values (:0,:1) select * from dual"
    );
    assert_eq!(
        journal.executed[0].1,
        vec![Value::Integer(7), Value::Integer(70)]
    );
}
