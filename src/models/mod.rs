// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for API responses and credentials.

pub mod activity;
pub mod credentials;
pub mod measure;
pub mod sleep;
pub mod subscription;

pub use activity::ActivityGroup;
pub use credentials::Credentials;
pub use measure::{scale, Measure, MeasureGroup, MeasureType, Measures};
pub use sleep::SleepSummaryGroup;
pub use subscription::SubscriptionProfile;
