pub mod blocks;
pub mod items;
pub mod model;
pub mod reorder;
pub mod select;

use scraper::Html;

use self::model::{MenuBuilder, MenuDocument};
use self::select::Selection;

/// Three-stage pipeline: page → meal blocks → day/meal selection → ordered
/// document. Synchronous and run over a fully materialized page; the builder
/// belongs to this one run and the finished document is handed off whole.
pub fn extract_menu(html: &str, selection: &Selection) -> MenuDocument {
    let page = Html::parse_document(html);
    let mut builder = MenuBuilder::default();
    for block in blocks::meal_blocks(&page) {
        select::apply(&block, selection, &mut builder);
    }
    let mut menu = builder.finish();
    if selection.brunch_day.is_some() {
        reorder::brunch_before_dinner(&mut menu);
    }
    menu
}

// ── Tests ──
