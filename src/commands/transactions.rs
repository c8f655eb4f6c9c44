// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::models::{Transaction, TxStatus, TxType};
use crate::query::{query, DateRange, Direction, FilterSpec, SortKey, SortSpec};
use crate::stats::recent;
use crate::utils::{
    cell_table, maybe_print_json, parse_date, signed_amount, status_color, type_color,
};
use anyhow::Result;
use comfy_table::Cell;
use tracing::warn;

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(session, sub)?,
        Some(("recent", sub)) => show_recent(session, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut data = query_rows(&session.transactions, sub)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", render(&data, &session.currency));
    }
    Ok(())
}

fn show_recent(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let limit = *sub.get_one::<usize>("limit").unwrap_or(&10);
    let data = recent(&session.transactions, limit);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", render(&data, &session.currency));
    }
    Ok(())
}

pub fn render(data: &[Transaction], ccy: &str) -> comfy_table::Table {
    let rows: Vec<Vec<Cell>> = data
        .iter()
        .map(|t| {
            vec![
                Cell::new(&t.date),
                Cell::new(&t.name),
                Cell::new(signed_amount(t, ccy)).fg(type_color(t.r#type)),
                Cell::new(t.status).fg(status_color(t.status)),
                Cell::new(&t.category),
                Cell::new(&t.user.name),
                Cell::new(&t.description),
            ]
        })
        .collect();
    cell_table(
        &["Date", "Name", "Amount", "Status", "Category", "User", "Description"],
        rows,
    )
}

/// Builds the filter and sort described by the shared query flags.
pub fn query_specs(sub: &clap::ArgMatches) -> Result<(FilterSpec, SortSpec)> {
    let status = sub
        .get_one::<String>("status")
        .map(|s| s.parse::<TxStatus>())
        .transpose()?;
    let kind = sub
        .get_one::<String>("type")
        .map(|s| s.parse::<TxType>())
        .transpose()?;
    let start = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    let end = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    let filters = FilterSpec {
        search_text: sub.get_one::<String>("search").cloned(),
        status,
        r#type: kind,
        date_range: DateRange { start, end },
    };

    let direction = match sub.get_one::<String>("order") {
        Some(o) => o.parse::<Direction>()?,
        None => Direction::default(),
    };
    let key = match sub.get_one::<String>("sort") {
        Some(raw) => {
            let key = SortKey::parse(raw);
            if key.is_none() {
                warn!("unsupported sort key '{}'; keeping filter order", raw);
            }
            key
        }
        None => Some(SortKey::Date),
    };
    Ok((filters, SortSpec { key, direction }))
}

pub fn query_rows(txs: &[Transaction], sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let (filters, sort) = query_specs(sub)?;
    Ok(query(txs, &filters, &sort))
}
