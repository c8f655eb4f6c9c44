// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rolls monthly totals into the windows the overview chart shows.
//!
//! Windows are positional: the latest buckets present in the data, never
//! buckets relative to today.

use crate::models::{Granularity, MonthlyRecord, Transaction, TxType};
use crate::utils::parse_period;
use chrono::Datelike;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::warn;

pub const MONTHLY_WINDOW: usize = 12;
pub const QUARTERLY_WINDOW: usize = 4;
pub const YEARLY_WINDOW: usize = 3;

#[derive(Default)]
struct Totals {
    income: Decimal,
    expenses: Decimal,
}

pub fn aggregate(records: &[MonthlyRecord], granularity: Granularity) -> Vec<MonthlyRecord> {
    match granularity {
        Granularity::Monthly => latest_months(records),
        Granularity::Quarterly => {
            let buckets = bucket_by(records, |y, m| (y, m.div_ceil(3)));
            take_last(buckets, QUARTERLY_WINDOW, |(y, q)| format!("{y}-Q{q}"))
        }
        Granularity::Yearly => {
            let buckets = bucket_by(records, |y, _| (y, 0));
            take_last(buckets, YEARLY_WINDOW, |(y, _)| y.to_string())
        }
    }
}

fn latest_months(records: &[MonthlyRecord]) -> Vec<MonthlyRecord> {
    let mut keyed: Vec<((i32, u32), &MonthlyRecord)> = records
        .iter()
        .filter_map(|r| match parse_period(&r.period) {
            Ok(key) => Some((key, r)),
            Err(e) => {
                warn!("skipping monthly record: {}", e);
                None
            }
        })
        .collect();
    // Stable, so records sharing a period keep their input order
    keyed.sort_by_key(|(key, _)| *key);
    let skip = keyed.len().saturating_sub(MONTHLY_WINDOW);
    keyed
        .into_iter()
        .skip(skip)
        .map(|(_, r)| MonthlyRecord::new(r.period.clone(), r.income, r.expenses))
        .collect()
}

fn bucket_by<F>(records: &[MonthlyRecord], key_of: F) -> BTreeMap<(i32, u32), Totals>
where
    F: Fn(i32, u32) -> (i32, u32),
{
    let mut map: BTreeMap<(i32, u32), Totals> = BTreeMap::new();
    for r in records {
        let (y, m) = match parse_period(&r.period) {
            Ok(ym) => ym,
            Err(e) => {
                warn!("skipping monthly record: {}", e);
                continue;
            }
        };
        let entry = map.entry(key_of(y, m)).or_default();
        entry.income += r.income;
        entry.expenses += r.expenses;
    }
    map
}

fn take_last<L>(
    buckets: BTreeMap<(i32, u32), Totals>,
    window: usize,
    label: L,
) -> Vec<MonthlyRecord>
where
    L: Fn((i32, u32)) -> String,
{
    let skip = buckets.len().saturating_sub(window);
    buckets
        .into_iter()
        .skip(skip)
        .map(|(key, t)| MonthlyRecord::new(label(key), t.income, t.expenses))
        .collect()
}

/// Sums a window into a single `Total` row.
pub fn window_totals(rows: &[MonthlyRecord]) -> MonthlyRecord {
    let (income, expenses) = rows
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(i, e), r| {
            (i + r.income, e + r.expenses)
        });
    MonthlyRecord::new("Total", income, expenses)
}

/// Builds the monthly series from raw transactions, oldest month first.
pub fn monthly_from_transactions(txs: &[Transaction]) -> Vec<MonthlyRecord> {
    let mut map: BTreeMap<(i32, u32), Totals> = BTreeMap::new();
    for t in txs {
        let Some(ts) = t.timestamp() else {
            warn!(
                "transaction {} has unparseable date '{}'; left out of monthly totals",
                t.id, t.date
            );
            continue;
        };
        let entry = map.entry((ts.year(), ts.month())).or_default();
        match t.r#type {
            TxType::Income => entry.income += t.amount,
            TxType::Expense => entry.expenses += t.amount,
        }
    }
    map.into_iter()
        .map(|((y, m), t)| MonthlyRecord::new(format!("{y:04}-{m:02}"), t.income, t.expenses))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(period: &str, income: i64, expenses: i64) -> MonthlyRecord {
        MonthlyRecord::new(period, Decimal::from(income), Decimal::from(expenses))
    }

    #[test]
    fn quarter_keys_follow_month() {
        let recs = vec![rec("2024-03", 1, 0), rec("2024-04", 2, 0), rec("2024-12", 4, 0)];
        let out = aggregate(&recs, Granularity::Quarterly);
        let periods: Vec<_> = out.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, ["2024-Q1", "2024-Q2", "2024-Q4"]);
    }

    #[test]
    fn yearly_keeps_last_three() {
        let recs: Vec<_> = (2019..=2024).map(|y| rec(&format!("{y}-06"), 10, 3)).collect();
        let out = aggregate(&recs, Granularity::Yearly);
        let periods: Vec<_> = out.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, ["2022", "2023", "2024"]);
        assert!(out.iter().all(|r| r.net == Decimal::from(7)));
    }

    #[test]
    fn bad_period_is_skipped() {
        let recs = vec![rec("2024-01", 5, 1), rec("garbage", 100, 0), rec("", 1, 1)];
        for g in [Granularity::Monthly, Granularity::Quarterly, Granularity::Yearly] {
            let out = aggregate(&recs, g);
            assert_eq!(out.len(), 1, "{g}");
            assert_eq!(out[0].income, Decimal::from(5));
        }
    }

    #[test]
    fn totals_of_empty_window_are_zero() {
        let t = window_totals(&[]);
        assert_eq!(t.period, "Total");
        assert!(t.income.is_zero() && t.expenses.is_zero() && t.net.is_zero());
    }
}
