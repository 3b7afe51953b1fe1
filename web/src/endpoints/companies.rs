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
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct MakeCompanyRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PatchCompanyRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub website: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CompanyResponse {
    #[serde(flatten)]
    pub company: MCompany,
    pub jobs: Vec<MJob>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MCompany>>> {
    let companies = ECompany::find().all(&state.db).await?;

    Ok(Json(companies))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeCompanyRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MCompany>)> {
    let Json(body) = body?;
    let now = Utc::now().naive_utc();

    let company = ACompany {
        name: Set(required(body.name, "company", "name")?),
        bio: Set(body.bio),
        website: Set(body.website),
        email: Set(body.email),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let company = company.insert(&state.db).await?;
    tracing::info!("Created company {}", company.id);

    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn get_company(
    state: State<Arc<ServerState>>,
    Path(company): Path<String>,
) -> WebResult<Json<Option<CompanyResponse>>> {
    let company = ECompany::find_by_id(parse_id(&company)?)
        .one(&state.db)
        .await?;

    let Some(company) = company else {
        return Ok(Json(None));
    };

    let jobs = company.find_related(entity::job::Entity).all(&state.db).await?;

    Ok(Json(Some(CompanyResponse { company, jobs })))
}

pub async fn put_company(
    state: State<Arc<ServerState>>,
    Path(company): Path<String>,
    body: Result<Json<PatchCompanyRequest>, JsonRejection>,
) -> WebResult<Json<MCompany>> {
    let id = parse_id(&company)?;

    if ECompany::find_by_id(id).one(&state.db).await?.is_none() {
        return Err(WebError::company_not_found());
    }

    let Json(body) = body?;

    let mut acompany = ACompany {
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    if let Some(name) = body.name {
        acompany.name = Set(name);
    }

    if let Some(bio) = body.bio {
        acompany.bio = Set(Some(bio));
    }

    if let Some(website) = body.website {
        acompany.website = Set(Some(website));
    }

    if let Some(email) = body.email {
        acompany.email = Set(Some(email));
    }

    let companies = ECompany::update_many()
        .set(acompany)
        .filter(CCompany::Id.eq(id))
        .exec_with_returning(&state.db)
        .await?;

    // The row can vanish between the existence check and the update.
    companies
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(WebError::company_not_found)
}

pub async fn delete_company(
    state: State<Arc<ServerState>>,
    Path(company): Path<String>,
) -> WebResult<StatusCode> {
    let id = parse_id(&company)?;
    ECompany::delete_by_id(id).exec(&state.db).await?;

    Ok(StatusCode::NO_CONTENT)
}
