use std::sync::LazyLock;

use regex::Regex;
use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Node, Selector};

use super::model::{Item, StationContent};

static UL_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("ul").unwrap());
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// An element's text content, trimmed and whitespace-collapsed. HTML
/// entities are already decoded by the parser.
pub fn text_of(el: ElementRef) -> String {
    normalize(&el.text().collect::<String>())
}

fn normalize(raw: &str) -> String {
    WS_RE.replace_all(raw.trim(), " ").into_owned()
}

/// Recursively extract a nested `<ul>` into an ordered item tree.
///
/// A direct `<li>` child carrying its own `<ul>` becomes a category labeled
/// with the entry's text outside that nested list; any other `<li>` becomes
/// a leaf. Recursion is strictly on direct children, so sibling levels are
/// never flattened into each other, and output order follows source order.
pub fn extract_items(list: ElementRef) -> Vec<Item> {
    let mut items = Vec::new();
    for entry in list.children().filter_map(ElementRef::wrap) {
        if entry.value().name() != "li" {
            continue;
        }
        match entry.select(&UL_SEL).next() {
            Some(nested) => items.push(Item::Category {
                label: label_of(entry, nested),
                items: extract_items(nested),
            }),
            None => items.push(Item::Leaf(text_of(entry))),
        }
    }
    items
}

/// Entry text with the nested list subtree excluded.
fn label_of(entry: ElementRef, nested: ElementRef) -> String {
    let mut raw = String::new();
    collect_text(*entry, nested.id(), &mut raw);
    normalize(&raw)
}

fn collect_text(node: NodeRef<'_, Node>, skip: NodeId, out: &mut String) {
    if node.id() == skip {
        return;
    }
    if let Node::Text(text) = node.value() {
        out.push_str(&text);
    }
    for child in node.children() {
        collect_text(child, skip, out);
    }
}

/// One table cell → (station name, cell content).
///
/// The station name comes from the cell's `data-label` attribute and falls
/// back to "Unknown Station" when absent or blank. A cell holding a list is
/// fully extracted; anything else becomes a single leaf of the cell's text.
pub fn extract_station(cell: ElementRef) -> (String, StationContent) {
    let name = cell
        .value()
        .attr("data-label")
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .unwrap_or("Unknown Station")
        .to_string();
    let content = match cell.select(&UL_SEL).next() {
        Some(list) => extract_items(list),
        None => vec![Item::Leaf(text_of(cell))],
    };
    (name, content)
}

// ── Tests ──
