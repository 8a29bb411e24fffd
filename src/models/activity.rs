// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily activity summaries from `v2/measure/getactivity`.

use serde::{Deserialize, Serialize};

/// One day's activity summary.
///
/// Mirrors the server fields directly; nothing is derived or scaled. Fields
/// beyond the three the library names are preserved in `extra` so callers
/// can reach steps, distance, etc. without the library chasing the
/// provider's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityGroup {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// IANA timezone the date is expressed in.
    pub timezone: String,
    /// Total calories burned that day.
    pub totalcalories: f64,
    /// Remaining server fields, untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
