/*
* SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
*
* SPDX-License-Identifier: AGPL-3.0-only
*/

pub mod candidates;
pub mod companies;
pub mod jobs;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use jobboard_core::types::BaseResponse;
use serde_json::{Value, json};

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_root() -> Json<Value> {
    Json(json!({ "hello": "hello, word!" }))
}

pub async fn get_health() -> WebResult<Json<BaseResponse<String>>> {
    let res = BaseResponse {
        error: false,
        message: "200 ALIVE".to_string(),
    };

    Ok(Json(res))
}
