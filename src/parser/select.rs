use std::sync::LazyLock;

use scraper::Selector;

use super::blocks::MealBlock;
use super::items::{extract_station, text_of};
use super::model::MenuBuilder;
use crate::config::{TargetDay, Weekday};

static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tbody tr").unwrap());
static DAY_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"th[scope="row"]"#).unwrap());
static CELL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("th, td").unwrap());

/// Day and brunch rules for one hall's extraction run. Constant for the run.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub target: TargetDay,
    pub brunch_day: Option<Weekday>,
}

impl Selection {
    /// True when the run targets exactly this hall's brunch day. On such a
    /// day only the Brunch serving and Dinner rows survive.
    fn special_day_only(&self) -> bool {
        match (self.brunch_day, self.target) {
            (Some(brunch), TargetDay::Day(day)) => brunch == day,
            _ => false,
        }
    }
}

/// Apply the day/meal rules to one block, recording surviving rows into the
/// builder. Everything dropped here is dropped before aggregation, so no
/// partial day ever reaches the document.
pub fn apply(block: &MealBlock<'_>, selection: &Selection, builder: &mut MenuBuilder) {
    let special_day_only = selection.special_day_only();

    if special_day_only && block.meal_name != "Brunch" && block.meal_name != "Dinner" {
        return;
    }

    if block.is_brunch {
        brunch_row(block, selection, builder);
    } else {
        weekday_rows(block, selection, special_day_only, builder);
    }
}

/// Brunch is a single serving row, recorded under the hall's brunch day,
/// or under the raw heading when no brunch day is configured.
fn brunch_row(block: &MealBlock<'_>, selection: &Selection, builder: &mut MenuBuilder) {
    let day_name = match selection.brunch_day {
        Some(day) => day.name().to_string(),
        None => block.meal_name_raw.clone(),
    };
    if !selection.target.matches(&day_name) {
        return;
    }

    let row = match block.table.select(&ROW_SEL).next() {
        Some(row) => row,
        None => return, // brunch table with no serving row
    };

    let stations = builder.open_day(&block.week_label, &block.meal_name, &day_name);
    for cell in row.select(&CELL_SEL) {
        let (name, content) = extract_station(cell);
        stations.set(name, content);
    }
}

/// Regular meals carry one row per weekday, each named by its
/// `th[scope="row"]` header cell. Rows without one are not day rows.
fn weekday_rows(
    block: &MealBlock<'_>,
    selection: &Selection,
    special_day_only: bool,
    builder: &mut MenuBuilder,
) {
    for row in block.table.select(&ROW_SEL) {
        let day_cell = match row.select(&DAY_SEL).next() {
            Some(cell) => cell,
            None => continue,
        };
        let day_name = text_of(day_cell);

        if !selection.target.matches(&day_name) {
            continue;
        }
        if special_day_only && block.meal_name != "Dinner" {
            continue;
        }

        let stations = builder.open_day(&block.week_label, &block.meal_name, &day_name);
        for cell in row.select(&CELL_SEL) {
            let (name, content) = extract_station(cell);
            stations.set(name, content);
        }
    }
}

// ── Tests ──
