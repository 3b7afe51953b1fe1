/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobCandidates::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(JobCandidates::JobId).integer().not_null())
                    .col(
                        ColumnDef::new(JobCandidates::CandidateId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobCandidates::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobCandidates::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-job_candidates")
                            .col(JobCandidates::JobId)
                            .col(JobCandidates::CandidateId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job_candidates-job_id")
                            .from(JobCandidates::Table, JobCandidates::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job_candidates-candidate_id")
                            .from(JobCandidates::Table, JobCandidates::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobCandidates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobCandidates {
    Table,
    JobId,
    CandidateId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Jobs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Candidates {
    Table,
    Id,
}
