// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filtering and ordering of an in-memory transaction list.

use crate::error::DataError;
use crate::models::{Transaction, TxStatus, TxType};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

impl DateRange {
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    fn contains(&self, ts: Option<NaiveDateTime>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(ts) = ts else {
            return false;
        };
        self.start.is_none_or(|s| ts >= s) && self.end.is_none_or(|e| ts <= e)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search_text: Option<String>,
    pub status: Option<TxStatus>,
    pub r#type: Option<TxType>,
    pub date_range: DateRange,
}

impl FilterSpec {
    pub fn matches(&self, t: &Transaction) -> bool {
        self.matches_search(t)
            && self.status.is_none_or(|s| t.status == s)
            && self.r#type.is_none_or(|k| t.r#type == k)
            && self.date_range.contains(t.timestamp())
    }

    fn matches_search(&self, t: &Transaction) -> bool {
        // Whitespace-only text is no constraint; otherwise match it verbatim
        let term = match self.search_text.as_deref() {
            Some(term) if !term.trim().is_empty() => term.to_lowercase(),
            _ => return true,
        };
        [&t.name, &t.description, &t.user.name]
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Amount,
    Date,
    Status,
}

impl SortKey {
    /// `None` for keys the engine does not know; callers then keep filter order.
    pub fn parse(s: &str) -> Option<SortKey> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(SortKey::Name),
            "amount" => Some(SortKey::Amount),
            "date" => Some(SortKey::Date),
            "status" => Some(SortKey::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

impl FromStr for Direction {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            _ => Err(DataError::UnknownDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: Direction,
}

impl Default for SortSpec {
    fn default() -> Self {
        SortSpec {
            key: Some(SortKey::Date),
            direction: Direction::Descending,
        }
    }
}

impl SortSpec {
    pub fn new(key: SortKey, direction: Direction) -> Self {
        SortSpec {
            key: Some(key),
            direction,
        }
    }

    pub fn unsorted() -> Self {
        SortSpec {
            key: None,
            direction: Direction::Ascending,
        }
    }
}

fn compare(a: &Transaction, b: &Transaction, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Amount => a.amount.cmp(&b.amount),
        // None orders before any Some, so undated records sort as the earliest
        SortKey::Date => a.timestamp().cmp(&b.timestamp()),
        SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

/// Returns the records matching every active filter, ordered by `sort`.
///
/// The sort is stable in both directions: equal keys keep the order they had
/// in `txs`.
pub fn query(txs: &[Transaction], filters: &FilterSpec, sort: &SortSpec) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = txs.iter().filter(|t| filters.matches(t)).cloned().collect();
    if let Some(key) = sort.key {
        match sort.direction {
            Direction::Ascending => out.sort_by(|a, b| compare(a, b, key)),
            Direction::Descending => out.sort_by(|a, b| compare(b, a, key)),
        }
    }
    out
}
