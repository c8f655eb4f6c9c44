// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::query::{Direction, SortKey};
use finboard::source::sample_transactions;
use finboard::{cli, commands::transactions};

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["finboard", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn default_view_is_newest_first() {
    let m = list_matches(&[]);
    let rows = transactions::query_rows(&sample_transactions(), &m).unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0].date, "2024-04-20");
    assert_eq!(rows[5].date, "2024-04-10");
}

#[test]
fn flags_build_matching_specs() {
    let m = list_matches(&[
        "--search", "bill", "--status", "failed", "--type", "expense", "--from", "2024-04-01",
        "--to", "2024-04-30", "--sort", "name", "--order", "asc",
    ]);
    let (filters, sort) = transactions::query_specs(&m).unwrap();
    assert_eq!(filters.search_text.as_deref(), Some("bill"));
    assert!(filters.date_range.is_active());
    assert_eq!(sort.key, Some(SortKey::Name));
    assert_eq!(sort.direction, Direction::Ascending);

    let rows = transactions::query_rows(&sample_transactions(), &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Utility Bill");
}

#[test]
fn to_date_includes_that_day() {
    let m = list_matches(&["--from", "2024-04-20", "--to", "2024-04-20"]);
    let rows = transactions::query_rows(&sample_transactions(), &m).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Salary Payment");
}

#[test]
fn bad_date_flag_is_an_error() {
    let m = list_matches(&["--from", "20/04/2024"]);
    let err = transactions::query_rows(&sample_transactions(), &m).unwrap_err();
    assert!(err.to_string().contains("expected YYYY-MM-DD"));
}

#[test]
fn unsupported_sort_keeps_filter_order() {
    let m = list_matches(&["--sort", "category", "--type", "income"]);
    let (_, sort) = transactions::query_specs(&m).unwrap();
    assert_eq!(sort.key, None);
    let rows = transactions::query_rows(&sample_transactions(), &m).unwrap();
    let ids: Vec<_> = rows.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "5"]);
}

#[test]
fn limit_flag_parses() {
    let m = list_matches(&["--limit", "2"]);
    assert_eq!(m.get_one::<usize>("limit"), Some(&2));
}
