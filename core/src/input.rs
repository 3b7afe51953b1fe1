/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, FixedOffset, NaiveDate};
use thiserror::Error;

use super::consts::*;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("notNull Violation: {entity}.{field} cannot be null")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("invalid input syntax for type integer: \"{0}\"")]
    InvalidId(String),
    #[error("invalid input syntax for type timestamp with time zone: \"{0}\"")]
    InvalidDateTime(String),
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

/// Parses a primary key taken from a request path.
pub fn parse_id(s: &str) -> Result<i32, InputError> {
    s.trim()
        .parse::<i32>()
        .map_err(|_| InputError::InvalidId(s.to_string()))
}

/// Unwraps a field the database declares `NOT NULL`.
pub fn required<T>(
    value: Option<T>,
    entity: &'static str,
    field: &'static str,
) -> Result<T, InputError> {
    value.ok_or(InputError::MissingField { entity, field })
}

/// Accepts a full RFC 3339 timestamp or a bare `YYYY-MM-DD` date, read as
/// midnight UTC.
pub fn parse_date_time(s: &str) -> Result<DateTime<FixedOffset>, InputError> {
    let s = s.trim();

    if let Ok(date_time) = DateTime::parse_from_rfc3339(s) {
        return Ok(date_time);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date_time| date_time.and_utc().fixed_offset())
        .ok_or_else(|| InputError::InvalidDateTime(s.to_string()))
}
