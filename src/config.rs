// Runtime configuration for the command-line front end
use chrono::{Local, NaiveDateTime, Utc};

use crate::cli::{Cli, Clock, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub clock: Clock,
    pub format: OutputFormat,
}

impl Config {
    /// CLI flags win over environment variables (resolved by clap), which win over defaults.
    pub fn new(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            clock: cli.clock.unwrap_or(defaults.clock),
            format: cli.format.unwrap_or(defaults.format),
        }
    }

    /// Wall-clock reading handed to the calculator when the user gives no date or time
    pub fn now(&self) -> NaiveDateTime {
        match self.clock {
            Clock::Local => Local::now().naive_local(),
            Clock::Utc => Utc::now().naive_utc(),
        }
    }
}
