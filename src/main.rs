// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finboard::commands::{self, Session};
use finboard::source::{self, DataSource};
use finboard::{cli, config, utils};

fn main() -> Result<()> {
    utils::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let cfg_path = config::config_path()?;
    if let Some(("config", sub)) = matches.subcommand() {
        return commands::config::handle(&cfg_path, sub);
    }

    let cfg = config::load_from(&cfg_path)?;
    let src = matches
        .get_one::<String>("source")
        .or(cfg.source.as_ref())
        .map(|s| DataSource::parse(s))
        .unwrap_or(DataSource::Sample);
    tracing::info!("using data source {}", src.describe());

    let session = Session {
        transactions: source::load_or_empty(&src),
        currency: cfg.currency,
    };

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&session, sub)?,
        Some(("report", sub)) => commands::reports::handle(&session, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&session, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&session, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
