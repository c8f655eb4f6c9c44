// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Parse failures for the small vocabularies the engine understands.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("Invalid period '{0}', expected YYYY-MM")]
    MalformedPeriod(String),
    #[error("Unknown status '{0}' (use completed|pending|failed)")]
    UnknownStatus(String),
    #[error("Unknown transaction type '{0}' (use income|expense)")]
    UnknownType(String),
    #[error("Unknown granularity '{0}' (use monthly|quarterly|yearly)")]
    UnknownGranularity(String),
    #[error("Unknown sort direction '{0}' (use asc|desc)")]
    UnknownDirection(String),
    #[error("Unknown format: {0} (use csv|json)")]
    UnknownFormat(String),
}
