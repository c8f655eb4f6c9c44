// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Where transactions come from: the bundled sample set, a JSON file, or a
//! remote endpoint.

use crate::models::{MonthlyRecord, Transaction, TxStatus, TxType, User};
use crate::utils::http_client;
use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Sample,
    File(PathBuf),
    Remote(String),
}

impl DataSource {
    pub fn parse(s: &str) -> DataSource {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("sample") {
            DataSource::Sample
        } else if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Remote(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            DataSource::Sample => "sample".to_string(),
            DataSource::File(p) => p.display().to_string(),
            DataSource::Remote(u) => u.clone(),
        }
    }
}

/// Decodes a payload that is either a bare list or `{ "transactions": [...] }`.
/// Records that do not fit the transaction shape are logged and dropped.
pub fn decode_transactions(payload: Value) -> Result<Vec<Transaction>> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("transactions") {
            Some(Value::Array(items)) => items,
            _ => bail!("Expected an object with a 'transactions' list"),
        },
        _ => bail!("Expected a list of transactions"),
    };
    let total = items.len();
    let txs: Vec<Transaction> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| {
            let id = item
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or("<no id>")
                .to_string();
            match serde_json::from_value::<Transaction>(item) {
                Ok(t) => Some(t),
                Err(e) => {
                    warn!("skipping record #{} (id {}): {}", i, id, e);
                    None
                }
            }
        })
        .collect();
    if txs.len() < total {
        warn!("kept {} of {} records", txs.len(), total);
    }
    Ok(txs)
}

pub fn load(src: &DataSource) -> Result<Vec<Transaction>> {
    let txs = match src {
        DataSource::Sample => sample_transactions(),
        DataSource::File(path) => read_transactions(path)?,
        DataSource::Remote(url) => fetch_transactions(url)?,
    };
    debug!("loaded {} transactions from {}", txs.len(), src.describe());
    Ok(normalize(txs))
}

/// Loads transactions, degrading to an empty list with a printed notice when the
/// source cannot be read.
pub fn load_or_empty(src: &DataSource) -> Vec<Transaction> {
    match load(src) {
        Ok(v) => v,
        Err(e) => {
            warn!("loading {} failed: {:#}", src.describe(), e);
            eprintln!("Notice: could not load transactions ({:#}); showing no data.", e);
            Vec::new()
        }
    }
}

pub fn read_transactions(path: &Path) -> Result<Vec<Transaction>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Open transactions file {}", path.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Parse transactions file {}", path.display()))?;
    decode_transactions(payload).with_context(|| format!("Read {}", path.display()))
}

pub fn fetch_transactions(url: &str) -> Result<Vec<Transaction>> {
    let client = http_client()?;
    let resp = client
        .get(url)
        .send()
        .with_context(|| format!("Request {}", url))?
        .error_for_status()?;
    let payload: Value = resp
        .json()
        .with_context(|| format!("Decode transactions from {}", url))?;
    decode_transactions(payload).with_context(|| format!("Read {}", url))
}

pub fn read_monthly_records(path: &Path) -> Result<Vec<MonthlyRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Open monthly records {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse monthly records {}", path.display()))
}

fn normalize(mut txs: Vec<Transaction>) -> Vec<Transaction> {
    for t in txs.iter_mut() {
        if t.amount.is_sign_negative() && !t.amount.is_zero() {
            warn!(
                "transaction {} carries a negative amount {}; storing its magnitude",
                t.id, t.amount
            );
            t.amount = t.amount.abs();
        }
    }
    txs
}

fn avatar(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&dpr=1"
    )
}

fn user(id: &str, name: &str, email: &str, photo: u32) -> User {
    User {
        id: id.into(),
        name: name.into(),
        email: email.into(),
        avatar: avatar(photo),
    }
}

/// The built-in demo data set.
pub fn sample_transactions() -> Vec<Transaction> {
    let rows: [(&str, i64, &str, TxStatus, TxType, &str, &str, User); 6] = [
        (
            "Salary Payment",
            5000,
            "2024-04-20",
            TxStatus::Completed,
            TxType::Income,
            "Salary",
            "Monthly salary payment",
            user("1", "Matheus Ferreira", "matheus@example.com", 220453),
        ),
        (
            "Freelance Project",
            850,
            "2024-04-18",
            TxStatus::Completed,
            TxType::Income,
            "Freelance",
            "Web development project",
            user("2", "Floyd Miles", "floyd@example.com", 91227),
        ),
        (
            "Office Supplies",
            230,
            "2024-04-17",
            TxStatus::Pending,
            TxType::Expense,
            "Office",
            "Monthly office supplies",
            user("3", "Jerome Bell", "jerome@example.com", 1040881),
        ),
        (
            "Grocery Shopping",
            156,
            "2024-04-15",
            TxStatus::Completed,
            TxType::Expense,
            "Food",
            "Weekly grocery shopping",
            user("4", "Sarah Johnson", "sarah@example.com", 415829),
        ),
        (
            "Investment Dividend",
            320,
            "2024-04-12",
            TxStatus::Completed,
            TxType::Income,
            "Investment",
            "Quarterly dividend payment",
            user("5", "Mike Chen", "mike@example.com", 769745),
        ),
        (
            "Utility Bill",
            89,
            "2024-04-10",
            TxStatus::Failed,
            TxType::Expense,
            "Utilities",
            "Monthly electricity bill",
            user("6", "Lisa Wang", "lisa@example.com", 712513),
        ),
    ];
    rows.into_iter()
        .enumerate()
        .map(
            |(i, (name, amount, date, status, kind, category, description, user))| Transaction {
                id: (i + 1).to_string(),
                name: name.into(),
                amount: Decimal::from(amount),
                date: date.into(),
                status,
                r#type: kind,
                category: category.into(),
                description: description.into(),
                user,
            },
        )
        .collect()
}
