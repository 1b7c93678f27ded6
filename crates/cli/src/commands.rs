//! clap command tree.
//!
//! The same subcommands serve shell mode and REPL/pipe mode; only the
//! top-level flags differ.

use clap::{Arg, ArgAction, Command};

/// Top-level CLI: global flags plus every subcommand.
pub fn build_cli() -> Command {
    Command::new("courier")
        .about("Query and update shipment trackings")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("user")
                .long("user")
                .short('u')
                .value_name("ID")
                .default_value("anonymous")
                .help("Act as this user for create, vote and update"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("FILE")
                .help("Load trackings and votes from a JSON fixture"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .value_name("N")
                .help("Default page size for list"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .subcommands(subcommands())
}

/// Command used to parse one REPL or pipe line.
pub fn build_repl_cmd() -> Command {
    Command::new("courier")
        .no_binary_name(true)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommands(subcommands())
}

fn subcommands() -> Vec<Command> {
    vec![
        Command::new("ping").about("Check the engine is up"),
        Command::new("list")
            .about("List trackings")
            .arg(
                Arg::new("search")
                    .long("search")
                    .short('s')
                    .value_name("TEXT")
                    .help("Substring of id or name, case-insensitive"),
            )
            .arg(
                Arg::new("status")
                    .long("status")
                    .value_name("STATUS")
                    .help("Created, In Transit, Delivered, Delayed or Canceled"),
            )
            .arg(
                Arg::new("sort-by")
                    .long("sort-by")
                    .value_name("FIELD")
                    .help("id, userId, name, status, orderTime, completedTime or serviceFee"),
            )
            .arg(
                Arg::new("order")
                    .long("order")
                    .value_name("asc|desc")
                    .help("Sort direction (default asc)"),
            )
            .arg(Arg::new("page").long("page").short('p').value_name("N"))
            .arg(Arg::new("limit").long("limit").short('n').value_name("N")),
        Command::new("statuses").about("List statuses in use"),
        Command::new("create")
            .about("Create a tracking")
            .arg(Arg::new("name").required(true))
            .arg(
                Arg::new("fee")
                    .required(true)
                    .allow_negative_numbers(true)
                    .help("Service fee"),
            ),
        Command::new("vote")
            .about("Rate a tracking from 1 to 5")
            .arg(Arg::new("id").required(true))
            .arg(Arg::new("rating").required(true)),
        Command::new("update")
            .about("Edit a tracking you own while it is Created")
            .arg(Arg::new("id").required(true))
            .arg(Arg::new("name").long("name").value_name("NAME"))
            .arg(
                Arg::new("fee")
                    .long("fee")
                    .value_name("AMOUNT")
                    .allow_negative_numbers(true),
            )
            .arg(
                Arg::new("order-time")
                    .long("order-time")
                    .value_name("RFC3339"),
            )
            .arg(Arg::new("status").long("status").value_name("STATUS")),
        Command::new("summary").about("Dashboard statistics"),
    ]
}
