/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "candidates")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub bio: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub open_to_work: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::job_candidate::Entity")]
    JobCandidate,
}

impl Related<super::job_candidate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobCandidate.def()
    }
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        super::job_candidate::Relation::Job.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::job_candidate::Relation::Candidate.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
