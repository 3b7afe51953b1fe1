/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20220510_120000_create_table_candidates;
mod m20220510_120100_create_table_companies;
mod m20220510_120200_create_table_jobs;
mod m20220510_120300_create_table_job_candidates;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220510_120000_create_table_candidates::Migration),
            Box::new(m20220510_120100_create_table_companies::Migration),
            Box::new(m20220510_120200_create_table_jobs::Migration),
            Box::new(m20220510_120300_create_table_job_candidates::Migration),
        ]
    }
}
