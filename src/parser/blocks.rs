use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::items::text_of;

static BLOCK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.block-table-full-block").unwrap());
static HEADING_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2.block__heading").unwrap());
static WEEK_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.paragraph_medium").unwrap());
static TABLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table.block__table").unwrap());

/// One meal period's table section for one week, as found on the page.
#[derive(Debug, Clone)]
pub struct MealBlock<'a> {
    /// Heading text as rendered, e.g. "Lunch" or "Saturday Brunch".
    pub meal_name_raw: String,
    /// Normalized name: any brunch heading collapses to "Brunch".
    pub meal_name: String,
    pub week_label: String,
    pub is_brunch: bool,
    pub table: ElementRef<'a>,
}

/// Find every meal block on the page, in page order. A block without a menu
/// table is skipped outright; missing headings and week labels fall back to
/// placeholder names.
pub fn meal_blocks(page: &Html) -> Vec<MealBlock<'_>> {
    page.select(&BLOCK_SEL).filter_map(parse_block).collect()
}

fn parse_block(section: ElementRef<'_>) -> Option<MealBlock<'_>> {
    let table = section.select(&TABLE_SEL).next()?;

    let meal_name_raw = section
        .select(&HEADING_SEL)
        .next()
        .map(text_of)
        .unwrap_or_else(|| "Unknown Meal".to_string());
    let week_label = section
        .select(&WEEK_SEL)
        .next()
        .map(text_of)
        .unwrap_or_else(|| "Unknown Week".to_string());

    let is_brunch = meal_name_raw.to_lowercase().contains("brunch");
    let meal_name = if is_brunch {
        "Brunch".to_string()
    } else {
        meal_name_raw.clone()
    };

    Some(MealBlock {
        meal_name_raw,
        meal_name,
        week_label,
        is_brunch,
        table,
    })
}

// ── Tests ──
