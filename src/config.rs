use std::fmt;

use anyhow::{bail, Result};
use chrono::{Datelike, Local};

/// One scrape target: a dining hall's menu page and its output document.
pub struct HallConfig {
    pub name: &'static str,
    pub url: &'static str,
    pub brunch_day: Option<Weekday>,
    pub filename: &'static str,
}

pub const DINING_HALLS: &[HallConfig] = &[
    HallConfig {
        name: "The View",
        url: "https://www.stthomas.edu/dining/locations-menus-hours/the-view/menu/",
        brunch_day: Some(Weekday::Saturday),
        filename: "current-view-menu.json",
    },
    HallConfig {
        name: "Northsider",
        url: "https://www.stthomas.edu/dining/locations-menus-hours/northsider/menu/",
        brunch_day: Some(Weekday::Sunday),
        filename: "current-northsider-menu.json",
    },
    HallConfig {
        name: "Cornerstone Kitchen",
        url: "https://www.stthomas.edu/dining/locations-menus-hours/cornerstore-kitchen/menu/index.html",
        brunch_day: None,
        filename: "current-cornerstone-menu.json",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Capitalized English name, the way day cells render it.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn from_name(s: &str) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s))
    }

    /// Weekday of the local clock, for the "today" target.
    pub fn today() -> Weekday {
        Weekday::ALL[Local::now().weekday().num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which day's menu to keep: every day, or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDay {
    All,
    Day(Weekday),
}

impl TargetDay {
    /// Parse a `--day` argument: a weekday name, "all", or "today".
    pub fn parse(s: &str) -> Result<TargetDay> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("today") {
            return Ok(TargetDay::Day(Weekday::today()));
        }
        if s.eq_ignore_ascii_case("all") {
            return Ok(TargetDay::All);
        }
        match Weekday::from_name(s) {
            Some(day) => Ok(TargetDay::Day(day)),
            None => bail!("not a weekday, \"all\", or \"today\": {:?}", s),
        }
    }

    /// Case-insensitive match against a day name as the page renders it.
    /// The source casing itself is kept by whoever stores the name.
    pub fn matches(self, day_name: &str) -> bool {
        match self {
            TargetDay::All => true,
            TargetDay::Day(day) => day_name.eq_ignore_ascii_case(day.name()),
        }
    }
}

impl fmt::Display for TargetDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetDay::All => f.write_str("all"),
            TargetDay::Day(day) => f.write_str(day.name()),
        }
    }
}

// ── Tests ──
