// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::reports::{overview, overview_table, Overview};
use super::transactions::render;
use super::Session;
use crate::models::{DashboardStats, Transaction};
use crate::stats::{recent, summarize};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub overview: Overview,
    pub recent: Vec<Transaction>,
}

pub fn build(session: &Session, sub: &clap::ArgMatches) -> Result<Dashboard> {
    let n = *sub.get_one::<usize>("recent").unwrap_or(&5);
    Ok(Dashboard {
        stats: summarize(&session.transactions),
        overview: overview(session, sub)?,
        recent: recent(&session.transactions, n),
    })
}

pub fn handle(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let board = build(session, sub)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &board)? {
        return Ok(());
    }
    let ccy = session.currency.as_str();
    let s = &board.stats;
    println!(
        "{}",
        pretty_table(
            &["Total Balance", "Total Income", "Total Expenses", "Transactions"],
            vec![vec![
                fmt_money(&s.total_balance, ccy),
                fmt_money(&s.total_income, ccy),
                fmt_money(&s.total_expenses, ccy),
                s.total_transactions.to_string(),
            ]],
        )
    );
    if board.overview.rows.is_empty() {
        println!("No overview data available");
    } else {
        println!("{}", overview_table(&board.overview));
    }
    println!("Recent Transactions");
    println!("{}", render(&board.recent, ccy));
    Ok(())
}
