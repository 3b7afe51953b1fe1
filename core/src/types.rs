/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug, Clone)]
#[command(name = "JobBoard", display_name = "JobBoard", bin_name = "jobboard-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "JOBBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "JOBBOARD_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "JOBBOARD_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "JOBBOARD_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "JOBBOARD_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "JOBBOARD_DB_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub db_max_connections: u32,
    #[arg(long, env = "JOBBOARD_DB_TIMEOUT", value_parser = greater_than_zero::<u64>, default_value = "8")]
    pub db_timeout: u64,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type ECandidate = candidate::Entity;
pub type ECompany = company::Entity;
pub type EJob = job::Entity;
pub type EJobCandidate = job_candidate::Entity;

pub type MCandidate = candidate::Model;
pub type MCompany = company::Model;
pub type MJob = job::Model;
pub type MJobCandidate = job_candidate::Model;

pub type ACandidate = candidate::ActiveModel;
pub type ACompany = company::ActiveModel;
pub type AJob = job::ActiveModel;
pub type AJobCandidate = job_candidate::ActiveModel;

pub type CCandidate = candidate::Column;
pub type CCompany = company::Column;
pub type CJob = job::Column;
pub type CJobCandidate = job_candidate::Column;
