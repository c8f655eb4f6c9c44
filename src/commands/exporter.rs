// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::transactions::query_rows;
use super::Session;
use crate::error::DataError;
use crate::models::Transaction;
use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(DataError::UnknownFormat(s.to_string())),
        }
    }
}

pub const HEADERS: [&str; 8] = [
    "Name",
    "Date",
    "Amount",
    "Type",
    "Status",
    "Category",
    "User",
    "Description",
];

pub fn handle(session: &Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(session, sub),
        _ => Ok(()),
    }
}

fn export_transactions(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let fmt: ExportFormat = sub
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("csv")
        .parse()?;
    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => default_file_name(fmt),
    };
    // Rows go out in exactly the order the list view shows them
    let rows = query_rows(&session.transactions, sub)?;

    let file = std::fs::File::create(&out).with_context(|| format!("Create {}", out))?;
    match fmt {
        ExportFormat::Csv => write_csv(file, &rows)?,
        ExportFormat::Json => write_json(file, &rows)?,
    }
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}

pub fn default_file_name(fmt: ExportFormat) -> String {
    let today = chrono::Local::now().date_naive();
    format!("transactions_{}.{}", today, fmt.extension())
}

pub fn write_csv<W: Write>(w: W, rows: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record(HEADERS)?;
    for t in rows {
        let amount = t.amount.to_string();
        wtr.write_record([
            t.name.as_str(),
            t.date.as_str(),
            amount.as_str(),
            t.r#type.as_str(),
            t.status.as_str(),
            t.category.as_str(),
            t.user.name.as_str(),
            t.description.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(mut w: W, rows: &[Transaction]) -> Result<()> {
    let items: Vec<_> = rows
        .iter()
        .map(|t| {
            json!({
                "name": t.name, "date": t.date, "amount": t.amount.to_string(),
                "type": t.r#type.as_str(), "status": t.status.as_str(), "category": t.category,
                "user": t.user.name, "description": t.description
            })
        })
        .collect();
    w.write_all(serde_json::to_string_pretty(&items)?.as_bytes())?;
    Ok(())
}
