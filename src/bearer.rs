use std::fmt;

use chrono::NaiveTime;

const ROLLOVER_TIMES: [NaiveTime; 4] = [hm(0, 45), hm(6, 45), hm(12, 45), hm(18, 45)];

const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid rollover time"),
    }
}

/// The four signs that name a solar year, in the order they follow each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearBearer {
    Kali,
    Tochtli,
    Akatl,
    Tekpatl,
}

impl YearBearer {
    pub const ALL: [YearBearer; 4] = [
        YearBearer::Kali,
        YearBearer::Tochtli,
        YearBearer::Akatl,
        YearBearer::Tekpatl,
    ];

    /// Looks up a bearer by its position, wrapping modulo 4
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            YearBearer::Kali => "Kali",
            YearBearer::Tochtli => "Tochtli",
            YearBearer::Akatl => "Akatl",
            YearBearer::Tekpatl => "Tekpatl",
        }
    }

    /// Time of day at which the counting day advances during a year of this bearer
    pub fn rollover(self) -> NaiveTime {
        ROLLOVER_TIMES[self.index()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

impl fmt::Display for YearBearer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
