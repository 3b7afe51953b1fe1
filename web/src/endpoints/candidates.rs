/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use jobboard_core::input::{parse_id, required};
use jobboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MakeCandidateRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub open_to_work: Option<bool>,
}

/// Fields left out of the body keep their stored value.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchCandidateRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub open_to_work: Option<bool>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MCandidate>>> {
    let candidates = ECandidate::find().all(&state.db).await?;

    Ok(Json(candidates))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeCandidateRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MCandidate>)> {
    let Json(body) = body?;
    let now = Utc::now().naive_utc();

    let candidate = ACandidate {
        name: Set(required(body.name, "candidate", "name")?),
        bio: Set(body.bio),
        email: Set(required(body.email, "candidate", "email")?),
        phone: Set(body.phone),
        open_to_work: Set(body.open_to_work.unwrap_or(false)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let candidate = candidate.insert(&state.db).await?;
    tracing::info!("Created candidate {}", candidate.id);

    Ok((StatusCode::CREATED, Json(candidate)))
}

pub async fn get_candidate(
    state: State<Arc<ServerState>>,
    Path(candidate): Path<String>,
) -> WebResult<Json<Option<MCandidate>>> {
    let candidate = ECandidate::find_by_id(parse_id(&candidate)?)
        .one(&state.db)
        .await?;

    Ok(Json(candidate))
}

pub async fn put_candidate(
    state: State<Arc<ServerState>>,
    Path(candidate): Path<String>,
    body: Result<Json<PatchCandidateRequest>, JsonRejection>,
) -> WebResult<Json<MCandidate>> {
    let id = parse_id(&candidate)?;

    let candidate = ECandidate::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(WebError::candidate_not_found)?;

    let Json(body) = body?;

    let mut acandidate: ACandidate = candidate.into();

    if let Some(name) = body.name {
        acandidate.name = Set(name);
    }

    if let Some(bio) = body.bio {
        acandidate.bio = Set(Some(bio));
    }

    if let Some(email) = body.email {
        acandidate.email = Set(email);
    }

    if let Some(phone) = body.phone {
        acandidate.phone = Set(Some(phone));
    }

    if let Some(open_to_work) = body.open_to_work {
        acandidate.open_to_work = Set(open_to_work);
    }

    acandidate.updated_at = Set(Utc::now().naive_utc());

    let candidate = acandidate.update(&state.db).await?;

    Ok(Json(candidate))
}

pub async fn delete_candidate(
    state: State<Arc<ServerState>>,
    Path(candidate): Path<String>,
) -> WebResult<StatusCode> {
    let id = parse_id(&candidate)?;
    let res = ECandidate::delete_by_id(id).exec(&state.db).await?;
    tracing::debug!("Deleted {} candidate row(s) for id {}", res.rows_affected, id);

    Ok(StatusCode::NO_CONTENT)
}
