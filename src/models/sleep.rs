// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sleep-session summaries from `v2/sleep/getsummary`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One sleep-session record.
///
/// `more` is response-level metadata (whether the server holds further
/// pages) copied onto every record for convenience; it carries no
/// per-record meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummaryGroup {
    /// Server-assigned session id.
    pub id: u64,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// IANA timezone the date is expressed in.
    pub timezone: String,
    /// When the record was last modified server-side.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub modified: DateTime<Utc>,
    /// Device model code that captured the session.
    pub model: i64,
    /// Whether the server has more data beyond this response.
    #[serde(default)]
    pub more: bool,
}
