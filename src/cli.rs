use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};

/// Civil date to Tonalpouali / Xiuhpoualli converter.
#[derive(Parser)]
#[command(name = "tonalpouali", version, about = "Civil date to Tonalpouali / Xiuhpoualli converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format.
    #[arg(short, long, global = true, value_enum, env = "TONALPOUALI_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Clock supplying the default date and time.
    #[arg(long, global = true, value_enum, env = "TONALPOUALI_CLOCK")]
    pub clock: Option<Clock>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one civil date and time.
    Convert(ConvertArgs),
    /// List the five Nemontemi days of a Gregorian year.
    Audit(AuditArgs),
    /// Convert every day of a civil date range.
    Table(TableArgs),
}

#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Civil date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Time of day (HH:MM); defaults to the current time.
    #[arg(short, long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,
}

#[derive(clap::Args)]
pub struct AuditArgs {
    /// Gregorian year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

#[derive(clap::Args)]
pub struct TableArgs {
    /// First civil date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub from: NaiveDate,

    /// Last civil date (YYYY-MM-DD), inclusive.
    #[arg(long)]
    pub to: NaiveDate,

    /// Time of day used for every row (HH:MM).
    #[arg(short, long, value_parser = parse_time, default_value = "12:00")]
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Clock {
    #[default]
    Local,
    Utc,
}

fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}
