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
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Candidates::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Candidates::Name).string().not_null())
                    .col(ColumnDef::new(Candidates::Bio).text())
                    .col(
                        ColumnDef::new(Candidates::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Candidates::Phone).string())
                    .col(
                        ColumnDef::new(Candidates::OpenToWork)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Candidates::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Candidates::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Candidates {
    Table,
    Id,
    Name,
    Bio,
    Email,
    Phone,
    OpenToWork,
    CreatedAt,
    UpdatedAt,
}
