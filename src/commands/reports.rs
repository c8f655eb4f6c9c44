// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Session;
use crate::aggregate::{aggregate, monthly_from_transactions, window_totals};
use crate::models::{Granularity, MonthlyRecord};
use crate::source::read_monthly_records;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// The rows of one overview window and their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub rows: Vec<MonthlyRecord>,
    pub totals: MonthlyRecord,
}

impl Overview {
    pub fn new(rows: Vec<MonthlyRecord>) -> Self {
        let totals = window_totals(&rows);
        Overview { rows, totals }
    }
}

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("overview", sub)) = m.subcommand() {
        show_overview(session, sub)?;
    }
    Ok(())
}

fn show_overview(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = overview(session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.rows.is_empty() {
            let g = granularity(sub)?;
            println!("No data available for {} view", g.to_string().to_lowercase());
        } else {
            println!("{}", overview_table(&data));
        }
    }
    Ok(())
}

pub fn granularity(sub: &clap::ArgMatches) -> Result<Granularity> {
    Ok(match sub.get_one::<String>("period") {
        Some(p) => p.parse()?,
        None => Granularity::Monthly,
    })
}

pub fn overview_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<MonthlyRecord>> {
    let g = granularity(sub)?;
    let monthly = match sub.try_get_one::<String>("records").ok().flatten() {
        Some(path) => read_monthly_records(Path::new(path))?,
        None => monthly_from_transactions(&session.transactions),
    };
    Ok(aggregate(&monthly, g))
}

pub fn overview(session: &Session, sub: &clap::ArgMatches) -> Result<Overview> {
    Ok(Overview::new(overview_rows(session, sub)?))
}

fn row(r: &MonthlyRecord) -> Vec<String> {
    vec![
        r.period.clone(),
        format!("{:.2}", r.income),
        format!("{:.2}", r.expenses),
        format!("{:.2}", r.net),
    ]
}

/// Window rows followed by a `Total` row.
pub fn overview_table(data: &Overview) -> comfy_table::Table {
    let mut rows: Vec<Vec<String>> = data.rows.iter().map(row).collect();
    rows.push(row(&data.totals));
    pretty_table(&["Period", "Income", "Expenses", "Net"], rows)
}
