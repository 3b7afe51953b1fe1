/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

pub const CANDIDATE_NOT_FOUND: &str = "Candidato não encontrado";
pub const COMPANY_NOT_FOUND: &str = "Empresa não encontrada";
pub const JOB_NOT_FOUND: &str = "Vaga de emprego não encontrada";
pub const CANDIDATE_ID_NOT_NUMERIC: &str = "O id do candidato deve ser numérico";
