mod cli;
mod config;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tonalpouali::{audit_residual_year, convert, correspondence_table, CivilTimestamp};
use tracing::debug;

use crate::cli::{AuditArgs, Cli, Command, ConvertArgs, OutputFormat, TableArgs};
use crate::config::Config;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::new(&cli);
    debug!(?config, "configuration resolved");

    if let Err(e) = run(cli.command, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Convert(args) => run_convert(args, config),
        Command::Audit(args) => run_audit(args, config),
        Command::Table(args) => run_table(args, config),
    }
}

fn run_convert(args: ConvertArgs, config: &Config) -> Result<()> {
    let now = config.now();
    let date = args.date.unwrap_or(now.date());
    let time = args.time.unwrap_or(now.time());
    let result = convert(CivilTimestamp::from_parts(date, time));

    match config.format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            println!("{result}");
            Ok(())
        }
    }
}

fn run_audit(args: AuditArgs, config: &Config) -> Result<()> {
    let days = audit_residual_year(args.year);

    match config.format {
        OutputFormat::Json => print_json(&days),
        OutputFormat::Text => {
            println!("Nemontemi {}:", args.year);
            for day in &days {
                println!(" · {day}");
            }
            Ok(())
        }
    }
}

fn run_table(args: TableArgs, config: &Config) -> Result<()> {
    let rows = correspondence_table(args.from, args.to, args.time)
        .context("failed to build correspondence table")?;

    match config.format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Text => {
            for row in &rows {
                let kind = if row.is_nemontemi { "nemontemi" } else { "tonal" };
                println!(
                    "{}  {:<12} day {:>3}  {} {}",
                    row.gregorian_date,
                    row.xiuhpoualli_year,
                    row.xiuhpoualli_day,
                    kind,
                    row.day.position()
                );
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize result")?;
    println!("{rendered}");
    Ok(())
}
