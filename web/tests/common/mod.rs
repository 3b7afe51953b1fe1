/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use jobboard_core::types::*;
use sea_orm::{
    DatabaseConnection, MockDatabase, MockDatabaseConnection, MockExecResult, Statement, Value,
};
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mock://test".to_string()),
        database_url_file: None,
        db_max_connections: 10,
        db_timeout: 8,
    }
}

pub fn create_mock_state(db: DatabaseConnection) -> Arc<ServerState> {
    let cli = create_mock_cli();

    Arc::new(ServerState { db, cli })
}

pub fn create_test_server(db: DatabaseConnection) -> TestServer {
    TestServer::new(web::create_router(create_mock_state(db))).unwrap()
}

/// Keeps a handle on the mock connection so the statements sent by the
/// handlers can be read back with [`statements`].
pub fn create_recording_test_server(db: MockDatabase) -> (TestServer, Arc<MockDatabaseConnection>) {
    let connection = Arc::new(MockDatabaseConnection::new(db));
    let server = create_test_server(DatabaseConnection::MockDatabaseConnection(Arc::clone(
        &connection,
    )));

    (server, connection)
}

pub fn statements(connection: Arc<MockDatabaseConnection>) -> Vec<Statement> {
    DatabaseConnection::MockDatabaseConnection(connection)
        .into_transaction_log()
        .iter()
        .flat_map(|transaction| transaction.statements().to_vec())
        .collect()
}

pub fn values(statement: &Statement) -> Vec<Value> {
    statement
        .values
        .as_ref()
        .map(|values| values.0.clone())
        .unwrap_or_default()
}

pub fn limit_date() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2024-06-01T12:30:00-03:00").unwrap()
}

pub fn naive_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn exec_result(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

pub fn candidate(id: i32, name: &str, email: &str) -> MCandidate {
    MCandidate {
        id,
        name: name.to_string(),
        bio: Some("Looking for a backend role".to_string()),
        email: email.to_string(),
        phone: Some("+55 11 98888-7777".to_string()),
        open_to_work: true,
        created_at: naive_date(),
        updated_at: naive_date(),
    }
}

pub fn company(id: i32, name: &str) -> MCompany {
    MCompany {
        id,
        name: name.to_string(),
        bio: Some("We build things".to_string()),
        website: Some("https://example.com".to_string()),
        email: Some("contact@example.com".to_string()),
        created_at: naive_date(),
        updated_at: naive_date(),
    }
}

pub fn job(id: i32, title: &str, company_id: i32) -> MJob {
    MJob {
        id,
        title: title.to_string(),
        description: "Work on the job board API".to_string(),
        limit_date: limit_date(),
        company_id,
        created_at: naive_date(),
        updated_at: naive_date(),
    }
}
