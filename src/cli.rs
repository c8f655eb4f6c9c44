// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

/// Search, filter and sort options shared by listing and export.
fn query_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("search")
            .long("search")
            .short('s')
            .help("Case-insensitive match on name, description or user"),
    )
    .arg(
        Arg::new("status")
            .long("status")
            .value_parser(["completed", "pending", "failed"]),
    )
    .arg(
        Arg::new("type")
            .long("type")
            .value_parser(["income", "expense"]),
    )
    .arg(Arg::new("from").long("from").help("Start date YYYY-MM-DD (inclusive)"))
    .arg(Arg::new("to").long("to").help("End date YYYY-MM-DD (inclusive)"))
    .arg(
        Arg::new("sort")
            .long("sort")
            .default_value("date")
            .help("name | amount | date | status"),
    )
    .arg(
        Arg::new("order")
            .long("order")
            .default_value("desc")
            .value_parser(["asc", "desc"]),
    )
}

fn period_arg() -> Arg {
    Arg::new("period")
        .long("period")
        .short('p')
        .default_value("monthly")
        .help("monthly | quarterly | yearly")
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .about("Financial dashboard: transactions, overviews, and exports")
        .version(clap::crate_version!())
        .arg(
            Arg::new("source")
                .long("source")
                .global(true)
                .help("Data source: 'sample', a JSON file, or an http(s) URL"),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(json_flags(query_args(
                    Command::new("list").about("Filter and sort transactions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .value_parser(value_parser!(usize)),
                    ),
                )))
                .subcommand(json_flags(
                    Command::new("recent").about("Most recent transactions").arg(
                        Arg::new("limit")
                            .long("limit")
                            .default_value("10")
                            .value_parser(value_parser!(usize)),
                    ),
                )),
        )
        .subcommand(
            Command::new("report").about("Reports").subcommand(json_flags(
                Command::new("overview")
                    .about("Income and expenses by month, quarter, or year")
                    .arg(period_arg())
                    .arg(
                        Arg::new("records")
                            .long("records")
                            .help("JSON file of monthly records; derived from transactions if omitted"),
                    ),
            )),
        )
        .subcommand(json_flags(
            Command::new("dashboard")
                .about("Summary stats, overview, and recent activity")
                .arg(period_arg())
                .arg(
                    Arg::new("recent")
                        .long("recent")
                        .default_value("5")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("export").about("Export data").subcommand(query_args(
                Command::new("transactions")
                    .about("Export the filtered, sorted transaction view")
                    .arg(Arg::new("format").long("format").default_value("csv"))
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .help("Output path; defaults to transactions_<today>.<format>"),
                    ),
            )),
        )
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-source").arg(Arg::new("value").required(true)),
                )
                .subcommand(Command::new("clear-source"))
                .subcommand(
                    Command::new("set-currency").arg(Arg::new("currency").required(true)),
                ),
        )
}
