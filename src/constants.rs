use chrono::NaiveDate;

// ---------- TONALPOUALI CYCLE ----------

/// Length of the Tonalpouali count (13 numerals * 20 signs)
pub const TONAL_CYCLE: u16 = 260;
pub const NUMERAL_COUNT: u16 = 13;
pub const SIGN_COUNT: u16 = 20;

/// The 20 day signs, in count order
pub const SIGNS: [&str; 20] = [
    "Sipaktli", "Ejekatl", "Kali", "Kuetspalin", "Koatl",
    "Mikistli", "Masatl", "Tochtli", "Atl", "Itskuintli",
    "Osomatli", "Malinali", "Akatl", "YoualMixtli", "Kuautli",
    "Koskakuautli", "Olin", "Tekpatl", "Kiauitl", "Xochitl",
];

// ---------- XIUHPOUALLI (SOLAR YEAR) ----------

/// Days covered by the 18 periods of 20 days
pub const ORDINARY_DAYS: u32 = 360;
pub const YEAR_NUMERAL_COUNT: u8 = 13;

/// Each solar year moves the day-1 numeral forward by this many places
pub const START_NUMERAL_STEP: u8 = 9;

// ---------- REFERENCE ANCHOR ----------

pub const REF_YEAR_GREGORIAN: i32 = 2025;
pub const REF_YEAR_NUMERAL: u8 = 13;
pub const REF_YEAR_START: NaiveDate = date(2025, 3, 15);
pub const REF_YEAR_START_TONAL_NUMERAL: u8 = 5;

// ---------- HISTORICAL CORRECTIONS ----------

/// Effective dates strictly before this receive the Julian/Gregorian gap
pub const GREGORIAN_REFORM: NaiveDate = date(1582, 10, 4);
pub const HISTORICAL_OFFSET_DAYS: u32 = 13;

/// Year "1 Tochtli", whose first Nemontemi day is 1 Sipaktli
pub const NEMONTEMI_REF_YEAR: i32 = 1611;
pub const NEMONTEMI_REF_TONAL_INDEX: u16 = 0;

/// Each solar year moves the Nemontemi anchor forward by one place per residual day
pub const NEMONTEMI_STEP: i64 = 5;

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid constant date"),
    }
}
