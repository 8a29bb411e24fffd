// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed views over API response payloads.
//!
//! Three endpoint families share one envelope, so a raw payload is
//! ambiguous on its own. Callers that know which endpoint produced the
//! payload use the typed parsers directly; [`MeasuresCollection::sniff`]
//! exists for callers holding an unlabeled payload and reproduces the
//! historical key-presence dispatch, with the difference that a payload
//! matching none of the shapes is a typed [`Error::MalformedResponse`]
//! instead of a crash.
//!
//! Every parser is a single-pass, all-or-nothing transform: either the
//! whole payload maps, or a structural error names what was missing.

use crate::error::{Error, Result};
use crate::models::{ActivityGroup, Measure, MeasureGroup, Measures, SleepSummaryGroup};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

/// The three record kinds the shared wrapper can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum MeasuresCollection {
    /// `measure/getmeas`: measure groups plus collection-level metadata.
    Measures(Measures),
    /// `v2/measure/getactivity`: one summary per day.
    Activities(Vec<ActivityGroup>),
    /// `v2/sleep/getsummary`: one record per sleep session.
    SleepSummaries(Vec<SleepSummaryGroup>),
}

impl MeasuresCollection {
    /// Infer the payload shape from which top-level keys are present.
    ///
    /// Dispatch order matches the original API behavior: an `activities`
    /// key wins, then `series` + `more`, and anything else is treated as a
    /// measurement payload (reached by elimination, so the measurement
    /// keys are then required).
    pub fn sniff(payload: Value) -> Result<Self> {
        if payload.get("activities").is_some() {
            parse_activities(payload).map(MeasuresCollection::Activities)
        } else if payload.get("series").is_some() && payload.get("more").is_some() {
            parse_sleep_summary(payload).map(MeasuresCollection::SleepSummaries)
        } else {
            parse_measures(payload).map(MeasuresCollection::Measures)
        }
    }

    /// Number of records, regardless of kind.
    pub fn len(&self) -> usize {
        match self {
            MeasuresCollection::Measures(m) => m.len(),
            MeasuresCollection::Activities(a) => a.len(),
            MeasuresCollection::SleepSummaries(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Deserialize)]
struct RawMeasuresBody {
    updatetime: i64,
    timezone: String,
    measuregrps: Vec<RawMeasureGroup>,
}

#[derive(Deserialize)]
struct RawMeasureGroup {
    grpid: u64,
    attrib: i64,
    category: i64,
    date: i64,
    measures: Vec<Measure>,
}

/// Parse a `measure/getmeas` payload.
///
/// Requires `measuregrps`, `timezone` and `updatetime`; the shared
/// timezone is attached to every group.
pub fn parse_measures(payload: Value) -> Result<Measures> {
    let raw: RawMeasuresBody = serde_json::from_value(payload)
        .map_err(|e| Error::MalformedResponse(format!("measure payload: {}", e)))?;

    let updatetime = epoch_to_datetime(raw.updatetime)?;
    let groups = raw
        .measuregrps
        .into_iter()
        .map(|g| {
            Ok(MeasureGroup {
                grpid: g.grpid,
                attrib: g.attrib,
                category: g.category,
                date: epoch_to_datetime(g.date)?,
                timezone: raw.timezone.clone(),
                measures: g.measures,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Measures {
        updatetime,
        timezone: raw.timezone,
        groups,
    })
}

/// Parse a `v2/measure/getactivity` payload. Requires `activities`.
pub fn parse_activities(payload: Value) -> Result<Vec<ActivityGroup>> {
    #[derive(Deserialize)]
    struct RawActivitiesBody {
        activities: Vec<ActivityGroup>,
    }

    let raw: RawActivitiesBody = serde_json::from_value(payload)
        .map_err(|e| Error::MalformedResponse(format!("activity payload: {}", e)))?;
    Ok(raw.activities)
}

/// Parse a `v2/sleep/getsummary` payload.
///
/// Requires `series` and `more`; the response-level `more` flag is copied
/// onto every record.
pub fn parse_sleep_summary(payload: Value) -> Result<Vec<SleepSummaryGroup>> {
    #[derive(Deserialize)]
    struct RawSleepBody {
        series: Vec<SleepSummaryGroup>,
        more: bool,
    }

    let raw: RawSleepBody = serde_json::from_value(payload)
        .map_err(|e| Error::MalformedResponse(format!("sleep payload: {}", e)))?;
    let more = raw.more;
    Ok(raw
        .series
        .into_iter()
        .map(|mut record| {
            record.more = more;
            record
        })
        .collect())
}

fn epoch_to_datetime(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| Error::MalformedResponse(format!("epoch {} out of range", secs)))
}
