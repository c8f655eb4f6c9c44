// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::models::{Transaction, TxStatus, TxType, User};
use finboard::query::{query, DateRange, Direction, FilterSpec, SortKey, SortSpec};
use finboard::source::sample_transactions;
use rust_decimal::Decimal;

fn tx(
    id: &str,
    name: &str,
    amount: i64,
    date: &str,
    status: TxStatus,
    kind: TxType,
) -> Transaction {
    Transaction {
        id: id.into(),
        name: name.into(),
        amount: Decimal::from(amount),
        date: date.into(),
        status,
        r#type: kind,
        category: String::new(),
        description: String::new(),
        user: User {
            id: "u".into(),
            name: "Someone".into(),
            email: "someone@example.com".into(),
            avatar: String::new(),
        },
    }
}

fn ids(v: &[Transaction]) -> Vec<&str> {
    v.iter().map(|t| t.id.as_str()).collect()
}

fn day(s: &str) -> Option<chrono::NaiveDateTime> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[test]
fn search_office_sorted_by_amount_desc() {
    let mut txs = sample_transactions();
    let mut rent = tx("7", "Rent", 1200, "2024-04-01", TxStatus::Completed, TxType::Expense);
    rent.description = "Shared OFFICE space".into();
    txs.push(rent);

    let filters = FilterSpec {
        search_text: Some("office".into()),
        ..Default::default()
    };
    let out = query(&txs, &filters, &SortSpec::new(SortKey::Amount, Direction::Descending));
    assert_eq!(ids(&out), ["7", "3"]);
}

#[test]
fn search_matches_user_name() {
    let out = query(
        &sample_transactions(),
        &FilterSpec {
            search_text: Some("floyd".into()),
            ..Default::default()
        },
        &SortSpec::default(),
    );
    assert_eq!(ids(&out), ["2"]);
}

#[test]
fn blank_search_is_no_constraint() {
    let txs = sample_transactions();
    let out = query(
        &txs,
        &FilterSpec {
            search_text: Some("   ".into()),
            ..Default::default()
        },
        &SortSpec::unsorted(),
    );
    assert_eq!(out, txs);
}

#[test]
fn predicates_combine_with_and() {
    let filters = FilterSpec {
        status: Some(TxStatus::Completed),
        r#type: Some(TxType::Expense),
        ..Default::default()
    };
    let out = query(&sample_transactions(), &filters, &SortSpec::default());
    assert_eq!(ids(&out), ["4"]);
    assert!(out.iter().all(|t| filters.matches(t)));
}

#[test]
fn date_range_is_inclusive_on_both_ends() {
    let filters = FilterSpec {
        date_range: DateRange {
            start: day("2024-04-12"),
            end: day("2024-04-17"),
        },
        ..Default::default()
    };
    let out = query(
        &sample_transactions(),
        &filters,
        &SortSpec::new(SortKey::Date, Direction::Ascending),
    );
    assert_eq!(ids(&out), ["5", "4", "3"]);
}

#[test]
fn open_ended_date_range() {
    let filters = FilterSpec {
        date_range: DateRange {
            start: day("2024-04-18"),
            end: None,
        },
        ..Default::default()
    };
    let out = query(&sample_transactions(), &filters, &SortSpec::default());
    assert_eq!(ids(&out), ["1", "2"]);
}

#[test]
fn undated_record_is_excluded_by_range_and_sorts_first_ascending() {
    let txs = vec![
        tx("a", "A", 1, "2024-01-05", TxStatus::Completed, TxType::Income),
        tx("b", "B", 1, "someday", TxStatus::Completed, TxType::Income),
        tx("c", "C", 1, "2024-01-01", TxStatus::Completed, TxType::Income),
    ];
    let ranged = FilterSpec {
        date_range: DateRange {
            start: day("2000-01-01"),
            end: None,
        },
        ..Default::default()
    };
    assert_eq!(ids(&query(&txs, &ranged, &SortSpec::unsorted())), ["a", "c"]);

    let asc = query(
        &txs,
        &FilterSpec::default(),
        &SortSpec::new(SortKey::Date, Direction::Ascending),
    );
    assert_eq!(ids(&asc), ["b", "c", "a"]);
    let desc = query(&txs, &FilterSpec::default(), &SortSpec::default());
    assert_eq!(ids(&desc), ["a", "c", "b"]);
}

#[test]
fn date_sort_uses_timestamps_not_strings() {
    let txs = vec![
        tx("late", "L", 1, "2024-01-01T23:00:00Z", TxStatus::Completed, TxType::Income),
        tx("early", "E", 1, "2024-01-01T01:00:00", TxStatus::Completed, TxType::Income),
    ];
    let out = query(
        &txs,
        &FilterSpec::default(),
        &SortSpec::new(SortKey::Date, Direction::Ascending),
    );
    assert_eq!(ids(&out), ["early", "late"]);
}

#[test]
fn name_sort_ignores_case() {
    let txs = vec![
        tx("1", "banana", 1, "2024-01-01", TxStatus::Completed, TxType::Income),
        tx("2", "Apple", 1, "2024-01-01", TxStatus::Completed, TxType::Income),
        tx("3", "cherry", 1, "2024-01-01", TxStatus::Completed, TxType::Income),
    ];
    let out = query(
        &txs,
        &FilterSpec::default(),
        &SortSpec::new(SortKey::Name, Direction::Ascending),
    );
    assert_eq!(ids(&out), ["2", "1", "3"]);
}

#[test]
fn ties_keep_filtered_order_in_both_directions() {
    let txs = vec![
        tx("1", "x", 10, "2024-01-01", TxStatus::Pending, TxType::Income),
        tx("2", "x", 20, "2024-01-01", TxStatus::Completed, TxType::Income),
        tx("3", "x", 10, "2024-01-01", TxStatus::Pending, TxType::Income),
        tx("4", "x", 20, "2024-01-01", TxStatus::Failed, TxType::Income),
    ];
    let asc = query(
        &txs,
        &FilterSpec::default(),
        &SortSpec::new(SortKey::Amount, Direction::Ascending),
    );
    assert_eq!(ids(&asc), ["1", "3", "2", "4"]);
    let desc = query(
        &txs,
        &FilterSpec::default(),
        &SortSpec::new(SortKey::Amount, Direction::Descending),
    );
    assert_eq!(ids(&desc), ["2", "4", "1", "3"]);

    let by_status = query(
        &txs,
        &FilterSpec::default(),
        &SortSpec::new(SortKey::Status, Direction::Ascending),
    );
    assert_eq!(ids(&by_status), ["2", "4", "1", "3"]);
}

#[test]
fn unknown_sort_key_keeps_filter_order() {
    assert_eq!(SortKey::parse("category"), None);
    let txs = sample_transactions();
    let sort = SortSpec {
        key: SortKey::parse("category"),
        direction: Direction::Descending,
    };
    let out = query(&txs, &FilterSpec::default(), &sort);
    assert_eq!(out, txs);
}

#[test]
fn query_is_idempotent() {
    let filters = FilterSpec {
        r#type: Some(TxType::Income),
        ..Default::default()
    };
    let sort = SortSpec::new(SortKey::Name, Direction::Descending);
    let once = query(&sample_transactions(), &filters, &sort);
    let twice = query(&once, &filters, &sort);
    assert_eq!(once, twice);
}

#[test]
fn results_are_drawn_from_the_input() {
    let txs = sample_transactions();
    let out = query(
        &txs,
        &FilterSpec {
            search_text: Some("monthly".into()),
            ..Default::default()
        },
        &SortSpec::default(),
    );
    assert!(!out.is_empty());
    assert!(out.iter().all(|t| txs.contains(t)));
}

#[test]
fn search_term_whitespace_is_part_of_the_match() {
    let txs = sample_transactions();
    let trailing = FilterSpec {
        search_text: Some("bill ".into()),
        ..Default::default()
    };
    assert!(query(&txs, &trailing, &SortSpec::unsorted()).is_empty());

    let inner = FilterSpec {
        search_text: Some("utility bill".into()),
        ..Default::default()
    };
    assert_eq!(ids(&query(&txs, &inner, &SortSpec::unsorted())), ["6"]);
}
