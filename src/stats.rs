// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{DashboardStats, Transaction, TxType};
use rust_decimal::Decimal;

pub fn summarize(txs: &[Transaction]) -> DashboardStats {
    let (income, expenses) = txs.iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(inc, exp), t| match t.r#type {
            TxType::Income => (inc + t.amount, exp),
            TxType::Expense => (inc, exp + t.amount),
        },
    );
    DashboardStats {
        total_balance: income - expenses,
        total_income: income,
        total_expenses: expenses,
        total_transactions: txs.len(),
    }
}

/// The `n` newest transactions, newest first. Undated records go last.
pub fn recent(txs: &[Transaction], n: usize) -> Vec<Transaction> {
    let mut keyed: Vec<_> = txs.iter().map(|t| (t.timestamp(), t)).collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    keyed.into_iter().take(n).map(|(_, t)| t.clone()).collect()
}
