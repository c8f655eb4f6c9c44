// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod config;
pub mod dashboard;
pub mod exporter;
pub mod reports;
pub mod transactions;

use crate::models::Transaction;

/// What a view command works on: the loaded list and the display currency.
pub struct Session {
    pub transactions: Vec<Transaction>,
    pub currency: String,
}
