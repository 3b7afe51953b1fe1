/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jobboard_core::consts::{CANDIDATE_NOT_FOUND, COMPANY_NOT_FOUND, JOB_NOT_FOUND};
use jobboard_core::input::InputError;
use jobboard_core::types::BaseResponse;
use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    NotFound(String),
    Database(DbErr),
    InputValidation(InputError),
    JsonParsing(JsonRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::InputValidation(err) => write!(f, "Input validation error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::InputValidation(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::NotFound(_) => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<InputError> for WebError {
    fn from(err: InputError) -> Self {
        WebError::InputValidation(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        // Persistence failures of every kind surface as 400 with the store's message.
        let (status, error_message) = match self {
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            WebError::InputValidation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            WebError::JsonParsing(err) => (StatusCode::BAD_REQUEST, err.body_text()),
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn candidate_not_found() -> Self {
        WebError::NotFound(CANDIDATE_NOT_FOUND.to_string())
    }

    pub fn company_not_found() -> Self {
        WebError::NotFound(COMPANY_NOT_FOUND.to_string())
    }

    pub fn job_not_found() -> Self {
        WebError::NotFound(JOB_NOT_FOUND.to_string())
    }
}
