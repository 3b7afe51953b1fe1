/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use jobboard_core::consts::{CANDIDATE_ID_NOT_NUMERIC, JOB_NOT_FOUND};
use jobboard_core::types::{MCandidate, MJob};
use chrono::DateTime;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, Value as SeaValue};
use serde_json::{Value, json};
use web::endpoints::jobs::*;

fn valid_job_body() -> Value {
    json!({
        "title": "Backend Developer",
        "description": "Work on the job board API",
        "limitDate": "2024-06-01",
        "companyId": 1
    })
}

#[tokio::test]
async fn test_list_jobs_with_company() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            (common::job(10, "Backend Developer", 1), common::company(1, "Acme")),
            (common::job(11, "Data Engineer", 2), common::company(2, "Globex")),
        ]])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.get("/jobs").await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    let jobs = body.as_array().unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0]["title"], "Backend Developer");
    assert_eq!(jobs[0]["company"]["name"], "Acme");
    assert_eq!(jobs[1]["companyId"], 2);
    assert_eq!(jobs[1]["company"]["id"], 2);
}

#[tokio::test]
async fn test_create_job() {
    let (server, connection) = common::create_recording_test_server(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![common::job(10, "Backend Developer", 1)]]),
    );

    let response = server.post("/jobs").json(&valid_job_body()).await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["id"], 10);
    assert_eq!(body["companyId"], 1);
    assert_eq!(
        DateTime::parse_from_rfc3339(body["limitDate"].as_str().unwrap()).unwrap(),
        common::limit_date()
    );

    let statements = common::statements(connection);
    let insert = &statements[0];
    assert!(insert.sql.starts_with(
        r#"INSERT INTO "jobs" ("title", "description", "limit_date", "company_id", "created_at", "updated_at")"#
    ));

    let midnight = DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z").unwrap();
    assert_eq!(common::values(insert)[2], SeaValue::from(midnight));
}

#[tokio::test]
async fn test_create_job_with_timestamp_limit_date() {
    let (server, connection) = common::create_recording_test_server(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![common::job(10, "Backend Developer", 1)]]),
    );

    let mut body = valid_job_body();
    body["limitDate"] = json!("2022-06-01T12:30:00.000Z");

    let response = server.post("/jobs").json(&body).await;

    response.assert_status(StatusCode::CREATED);

    let statements = common::statements(connection);
    let expected = DateTime::parse_from_rfc3339("2022-06-01T12:30:00Z").unwrap();
    assert_eq!(common::values(&statements[0])[2], SeaValue::from(expected));
}

#[tokio::test]
async fn test_create_job_with_invalid_limit_date() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = common::create_test_server(db);

    let mut body = valid_job_body();
    body["limitDate"] = json!("first of june");

    let response = server.post("/jobs").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(
        response.json::<Value>()["message"]
            .as_str()
            .unwrap()
            .contains("first of june")
    );
}

#[tokio::test]
async fn test_create_job_with_missing_fields() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let server = common::create_test_server(db);

    for field in ["title", "description", "limitDate", "companyId"] {
        let mut body = valid_job_body();
        body.as_object_mut().unwrap().remove(field);

        let response = server.post("/jobs").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["message"],
            format!("notNull Violation: job.{} cannot be null", field)
        );
    }
}

#[tokio::test]
async fn test_create_job_with_unknown_company() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom(
            "insert or update on table \"jobs\" violates foreign key constraint \"fk-jobs-company_id\""
                .to_string(),
        )])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.post("/jobs").json(&valid_job_body()).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["error"], true);
}

#[tokio::test]
async fn test_get_job_with_company_and_candidates() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
        .append_query_results([vec![common::company(1, "Acme")]])
        .append_query_results([vec![
            common::candidate(1, "Ana", "ana@example.com"),
            common::candidate(2, "Bruno", "bruno@example.com"),
        ]])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.get("/jobs/10").await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["id"], 10);
    assert_eq!(body["company"]["name"], "Acme");
    assert_eq!(body["candidateCount"], 2);
    assert_eq!(body["candidates"][0]["email"], "ana@example.com");
}

#[tokio::test]
async fn test_get_unexisting_job() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MJob>::new()])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.get("/jobs/99").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn test_update_job() {
    let existing = common::job(10, "Backend Developer", 1);
    let mut updated = existing.clone();
    updated.title = "Senior Backend Developer".to_string();

    let (server, connection) = common::create_recording_test_server(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![existing]])
            .append_query_results([vec![updated]]),
    );

    let response = server
        .put("/jobs/10")
        .json(&json!({ "title": "Senior Backend Developer" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["title"], "Senior Backend Developer");
    assert_eq!(body["description"], "Work on the job board API");

    let statements = common::statements(connection);
    assert_eq!(statements.len(), 2);

    let update = &statements[1];
    assert!(update.sql.starts_with(
        r#"UPDATE "jobs" SET "title" = $1, "updated_at" = $2 WHERE "jobs"."id" = $3"#
    ));

    let values = common::values(update);
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], SeaValue::from("Senior Backend Developer"));
    assert_eq!(values[2], SeaValue::from(10));
}

#[tokio::test]
async fn test_update_unexisting_job() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MJob>::new()])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server
        .put("/jobs/99")
        .json(&json!({ "title": "Nothing" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], JOB_NOT_FOUND);
}

#[tokio::test]
async fn test_update_unexisting_job_without_body() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MJob>::new()])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.put("/jobs/99").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], JOB_NOT_FOUND);
}

#[tokio::test]
async fn test_delete_job() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([common::exec_result(1)])
        .append_query_results([Vec::<MJob>::new()])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.delete("/jobs/10").await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get("/jobs/10").await;
    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), Value::Null);
}

const JOB_CANDIDATE_INSERT: &str = r#"INSERT INTO "job_candidates" ("job_id", "candidate_id", "created_at", "updated_at")"#;
const JOB_CANDIDATE_ON_CONFLICT: &str = r#"ON CONFLICT ("job_id", "candidate_id") DO NOTHING"#;

#[tokio::test]
async fn test_add_candidate_to_job() {
    let (server, connection) = common::create_recording_test_server(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
            .append_exec_results([common::exec_result(1)])
            .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
            .append_query_results([vec![common::company(1, "Acme")]])
            .append_query_results([vec![common::candidate(1, "Ana", "ana@example.com")]]),
    );

    let response = server.post("/jobs/10/candidates/1").await;
    response.assert_status(StatusCode::CREATED);
    assert!(response.text().is_empty());

    let response = server.get("/jobs/10").await;
    let body = response.json::<Value>();
    assert_eq!(body["candidateCount"], 1);
    assert_eq!(body["candidates"][0]["id"], 1);
    assert_eq!(body["candidates"][0]["name"], "Ana");
    assert_eq!(body["candidates"][0]["email"], "ana@example.com");

    let statements = common::statements(connection);
    assert_eq!(statements.len(), 5);

    let insert = &statements[1];
    assert!(insert.sql.starts_with(JOB_CANDIDATE_INSERT));
    assert!(insert.sql.ends_with(JOB_CANDIDATE_ON_CONFLICT));

    let values = common::values(insert);
    assert_eq!(values.len(), 4);
    assert_eq!(values[0], SeaValue::from(10));
    assert_eq!(values[1], SeaValue::from(1));
}

#[tokio::test]
async fn test_add_candidate_to_job_twice() {
    let (server, connection) = common::create_recording_test_server(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
            .append_exec_results([common::exec_result(0)]),
    );

    let response = server.post("/jobs/10/candidates/1").await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.text().is_empty());

    let statements = common::statements(connection);
    assert_eq!(statements.len(), 2);
    assert!(statements[1].sql.ends_with(JOB_CANDIDATE_ON_CONFLICT));
}

#[tokio::test]
async fn test_add_candidate_to_unexisting_job() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MJob>::new()])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.post("/jobs/99/candidates/1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], JOB_NOT_FOUND);
}

#[tokio::test]
async fn test_add_candidate_with_invalid_ids() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.post("/jobs/abc/candidates/1").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], JOB_NOT_FOUND);

    let response = server.post("/jobs/10/candidates/abc").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], CANDIDATE_ID_NOT_NUMERIC);
}

#[tokio::test]
async fn test_add_unexisting_candidate_to_job() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
        .append_exec_errors([DbErr::Custom(
            "insert or update on table \"job_candidates\" violates foreign key constraint"
                .to_string(),
        )])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.post("/jobs/10/candidates/999").await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_remove_candidate_from_job() {
    let (server, connection) = common::create_recording_test_server(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
            .append_exec_results([common::exec_result(1)])
            .append_query_results([vec![common::job(10, "Backend Developer", 1)]])
            .append_query_results([vec![common::company(1, "Acme")]])
            .append_query_results([vec![
                common::candidate(1, "Ana", "ana@example.com"),
                common::candidate(3, "Carla", "carla@example.com"),
            ]]),
    );

    let response = server.delete("/jobs/10/candidates/2").await;
    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server.get("/jobs/10").await;
    let body = response.json::<Value>();
    assert_eq!(body["candidateCount"], 2);

    let ids: Vec<i64> = body["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|candidate| candidate["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 3]);

    let statements = common::statements(connection);
    let delete = &statements[1];
    assert_eq!(
        delete.sql,
        r#"DELETE FROM "job_candidates" WHERE "job_candidates"."job_id" = $1 AND "job_candidates"."candidate_id" = $2"#
    );
    assert_eq!(
        common::values(delete),
        vec![SeaValue::from(10), SeaValue::from(2)]
    );
}

#[tokio::test]
async fn test_remove_candidate_from_unexisting_job() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MJob>::new()])
        .into_connection();
    let server = common::create_test_server(db);

    let response = server.delete("/jobs/99/candidates/1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], JOB_NOT_FOUND);
}

#[test]
fn test_job_response_serialization() {
    let candidates: Vec<MCandidate> = vec![common::candidate(1, "Ana", "ana@example.com")];
    let response = JobResponse {
        job: common::job(10, "Backend Developer", 1),
        company: Some(common::company(1, "Acme")),
        candidate_count: candidates.len(),
        candidates,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["candidateCount"], 1);
    assert_eq!(
        DateTime::parse_from_rfc3339(json["limitDate"].as_str().unwrap()).unwrap(),
        common::limit_date()
    );
    assert_eq!(json["company"]["name"], "Acme");
    assert!(json.get("job").is_none());
}

#[test]
fn test_make_job_request_deserialization() {
    let request: MakeJobRequest = serde_json::from_value(valid_job_body()).unwrap();

    assert_eq!(request.title.as_deref(), Some("Backend Developer"));
    assert_eq!(request.company_id, Some(1));
    assert_eq!(
        request.limit_date,
        Some(DateTime::parse_from_rfc3339("2024-06-01T00:00:00Z").unwrap())
    );
}
