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
use chrono::{DateTime, FixedOffset, Utc};
use jobboard_core::consts::CANDIDATE_ID_NOT_NUMERIC;
use jobboard_core::input::{parse_date_time, parse_id, required};
use jobboard_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MakeJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_limit_date")]
    pub limit_date: Option<DateTime<FixedOffset>>,
    pub company_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchJobRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_limit_date")]
    pub limit_date: Option<DateTime<FixedOffset>>,
    pub company_id: Option<i32>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobListItem {
    #[serde(flatten)]
    pub job: MJob,
    pub company: Option<MCompany>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    #[serde(flatten)]
    pub job: MJob,
    pub company: Option<MCompany>,
    pub candidates: Vec<MCandidate>,
    pub candidate_count: usize,
}

fn deserialize_limit_date<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|limit_date| parse_date_time(&limit_date).map_err(serde::de::Error::custom))
        .transpose()
}

async fn find_job(state: &ServerState, job: &str) -> WebResult<MJob> {
    // A job id that is not a number cannot match any job.
    let id = parse_id(job).map_err(|_| WebError::job_not_found())?;

    EJob::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(WebError::job_not_found)
}

fn parse_candidate_id(candidate: &str) -> WebResult<i32> {
    parse_id(candidate).map_err(|_| WebError::NotFound(CANDIDATE_ID_NOT_NUMERIC.to_string()))
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<JobListItem>>> {
    let jobs = EJob::find()
        .find_also_related(entity::company::Entity)
        .all(&state.db)
        .await?;

    let jobs = jobs
        .into_iter()
        .map(|(job, company)| JobListItem { job, company })
        .collect();

    Ok(Json(jobs))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeJobRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MJob>)> {
    let Json(body) = body?;
    let now = Utc::now().naive_utc();

    let job = AJob {
        title: Set(required(body.title, "job", "title")?),
        description: Set(required(body.description, "job", "description")?),
        limit_date: Set(required(body.limit_date, "job", "limitDate")?),
        company_id: Set(required(body.company_id, "job", "companyId")?),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let job = job.insert(&state.db).await?;
    tracing::info!("Created job {} for company {}", job.id, job.company_id);

    Ok((StatusCode::CREATED, Json(job)))
}

pub async fn get_job(
    state: State<Arc<ServerState>>,
    Path(job): Path<String>,
) -> WebResult<Json<Option<JobResponse>>> {
    let job = EJob::find_by_id(parse_id(&job)?).one(&state.db).await?;

    let Some(job) = job else {
        return Ok(Json(None));
    };

    let company = job
        .find_related(entity::company::Entity)
        .one(&state.db)
        .await?;
    let candidates = job
        .find_related(entity::candidate::Entity)
        .all(&state.db)
        .await?;

    Ok(Json(Some(JobResponse {
        job,
        company,
        candidate_count: candidates.len(),
        candidates,
    })))
}

pub async fn put_job(
    state: State<Arc<ServerState>>,
    Path(job): Path<String>,
    body: Result<Json<PatchJobRequest>, JsonRejection>,
) -> WebResult<Json<MJob>> {
    let id = parse_id(&job)?;

    if EJob::find_by_id(id).one(&state.db).await?.is_none() {
        return Err(WebError::job_not_found());
    }

    let Json(body) = body?;

    let mut ajob = AJob {
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    if let Some(title) = body.title {
        ajob.title = Set(title);
    }

    if let Some(description) = body.description {
        ajob.description = Set(description);
    }

    if let Some(limit_date) = body.limit_date {
        ajob.limit_date = Set(limit_date);
    }

    if let Some(company_id) = body.company_id {
        ajob.company_id = Set(company_id);
    }

    let jobs = EJob::update_many()
        .set(ajob)
        .filter(CJob::Id.eq(id))
        .exec_with_returning(&state.db)
        .await?;

    jobs.into_iter()
        .next()
        .map(Json)
        .ok_or_else(WebError::job_not_found)
}

pub async fn delete_job(
    state: State<Arc<ServerState>>,
    Path(job): Path<String>,
) -> WebResult<StatusCode> {
    let id = parse_id(&job)?;
    EJob::delete_by_id(id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn post_job_candidate(
    state: State<Arc<ServerState>>,
    Path((job, candidate)): Path<(String, String)>,
) -> WebResult<StatusCode> {
    let job = find_job(&state, &job).await?;
    let candidate_id = parse_candidate_id(&candidate)?;
    let now = Utc::now().naive_utc();

    let job_candidate = AJobCandidate {
        job_id: Set(job.id),
        candidate_id: Set(candidate_id),
        created_at: Set(now),
        updated_at: Set(now),
    };

    // Applying twice to the same job keeps a single row.
    EJobCandidate::insert(job_candidate)
        .on_conflict(
            OnConflict::columns([CJobCandidate::JobId, CJobCandidate::CandidateId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&state.db)
        .await?;

    tracing::info!("Added candidate {} to job {}", candidate_id, job.id);

    Ok(StatusCode::CREATED)
}

pub async fn delete_job_candidate(
    state: State<Arc<ServerState>>,
    Path((job, candidate)): Path<(String, String)>,
) -> WebResult<StatusCode> {
    let job = find_job(&state, &job).await?;
    let candidate_id = parse_candidate_id(&candidate)?;

    EJobCandidate::delete_many()
        .filter(CJobCandidate::JobId.eq(job.id))
        .filter(CJobCandidate::CandidateId.eq(candidate_id))
        .exec(&state.db)
        .await?;

    tracing::info!("Removed candidate {} from job {}", candidate_id, job.id);

    Ok(StatusCode::NO_CONTENT)
}
