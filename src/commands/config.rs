// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{load_from, save_to};
use crate::source::DataSource;
use crate::utils::pretty_table;
use anyhow::{bail, Result};
use std::path::Path;

pub fn handle(path: &Path, m: &clap::ArgMatches) -> Result<()> {
    let mut cfg = load_from(path)?;
    match m.subcommand() {
        Some(("show", _)) => {
            let source = cfg.source.clone().unwrap_or_else(|| "(sample)".into());
            println!(
                "{}",
                pretty_table(
                    &["Key", "Value"],
                    vec![
                        vec!["source".into(), source],
                        vec!["currency".into(), cfg.currency.clone()],
                        vec!["file".into(), path.display().to_string()],
                    ],
                )
            );
        }
        Some(("set-source", sub)) => {
            let raw = sub.get_one::<String>("value").map(|s| s.trim()).unwrap_or("");
            if raw.is_empty() {
                bail!("Source must not be empty");
            }
            let src = DataSource::parse(raw);
            if let DataSource::File(p) = &src {
                if !p.exists() {
                    bail!("Source file '{}' does not exist", p.display());
                }
            }
            cfg.source = Some(src.describe());
            save_to(path, &cfg)?;
            println!("Data source set to {}", src.describe());
        }
        Some(("clear-source", _)) => {
            cfg.source = None;
            save_to(path, &cfg)?;
            println!("Data source cleared; using sample data");
        }
        Some(("set-currency", sub)) => {
            let ccy = sub
                .get_one::<String>("currency")
                .map(|s| s.trim().to_uppercase())
                .unwrap_or_default();
            if ccy.is_empty() {
                bail!("Currency must not be empty");
            }
            cfg.currency = ccy.clone();
            save_to(path, &cfg)?;
            println!("Currency set to {}", ccy);
        }
        _ => {}
    }
    Ok(())
}
