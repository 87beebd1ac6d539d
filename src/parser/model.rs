use serde::ser::{Serialize, SerializeMap, Serializer};

/// One menu entry: a plain item, or a labeled category of nested entries.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Leaf(String),
    Category { label: String, items: Vec<Item> },
}

/// Everything one table cell holds, in source order.
pub type StationContent = Vec<Item>;

/// A leaf serializes as its text, a category as `{ label: [entries…] }`.
impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Item::Leaf(text) => serializer.serialize_str(text),
            Item::Category { label, items } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(label, items)?;
                map.end()
            }
        }
    }
}

/// One day's station map, insertion-ordered.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DayStations {
    pub stations: Vec<(String, StationContent)>,
}

impl DayStations {
    /// Insert or overwrite a station. A name collision keeps the original
    /// position and replaces the content (last write wins).
    pub fn set(&mut self, name: String, content: StationContent) {
        match self.stations.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = content,
            None => self.stations.push((name, content)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&StationContent> {
        self.stations
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, content)| content)
    }
}

/// One meal period's days: day name (source casing) → stations.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MealDays {
    pub days: Vec<(String, DayStations)>,
}

impl MealDays {
    /// Open one day for filling. Re-opening an existing day replaces its
    /// stations but keeps its position in the sequence.
    fn open(&mut self, day: &str) -> &mut DayStations {
        match self.days.iter().position(|(name, _)| name == day) {
            Some(at) => {
                self.days[at].1 = DayStations::default();
                &mut self.days[at].1
            }
            None => {
                self.days.push((day.to_string(), DayStations::default()));
                let last = self.days.len() - 1;
                &mut self.days[last].1
            }
        }
    }

    pub fn day(&self, name: &str) -> Option<&DayStations> {
        self.days
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, stations)| stations)
    }
}

/// One week of menus. Meals are an explicit ordered sequence of
/// (meal name, days) pairs, so meal order is a structural property of the
/// document rather than a map type's iteration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub label: String,
    pub meals: Vec<(String, MealDays)>,
}

impl Week {
    pub fn meal(&self, name: &str) -> Option<&MealDays> {
        self.meals
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, days)| days)
    }

    pub fn meal_names(&self) -> Vec<&str> {
        self.meals.iter().map(|(name, _)| name.as_str()).collect()
    }
}

/// Fully extracted menus for one hall: week label → meals → days → stations.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MenuDocument {
    pub weeks: Vec<Week>,
}

impl MenuDocument {
    pub fn week(&self, label: &str) -> Option<&Week> {
        self.weeks.iter().find(|week| week.label == label)
    }
}

/// Accumulates (week, meal, day, station) tuples for one hall's extraction.
/// Owned by exactly one run; insertion order is preserved at every level.
#[derive(Debug, Default)]
pub struct MenuBuilder {
    doc: MenuDocument,
}

impl MenuBuilder {
    /// Open one day under a week and meal, creating the missing levels in
    /// insertion order, and return its station map for filling.
    pub fn open_day(&mut self, week: &str, meal: &str, day: &str) -> &mut DayStations {
        let weeks = &mut self.doc.weeks;
        let week_at = match weeks.iter().position(|existing| existing.label == week) {
            Some(at) => at,
            None => {
                weeks.push(Week {
                    label: week.to_string(),
                    meals: Vec::new(),
                });
                weeks.len() - 1
            }
        };
        let meals = &mut weeks[week_at].meals;
        let meal_at = match meals.iter().position(|(name, _)| name == meal) {
            Some(at) => at,
            None => {
                meals.push((meal.to_string(), MealDays::default()));
                meals.len() - 1
            }
        };
        meals[meal_at].1.open(day)
    }

    pub fn finish(self) -> MenuDocument {
        self.doc
    }
}

/// Serializes an ordered pair sequence as a JSON object, keys in sequence
/// order. All map layers of the document go through this.
struct PairMap<'a, V>(&'a [(String, V)]);

impl<V: Serialize> Serialize for PairMap<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for DayStations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PairMap(&self.stations).serialize(serializer)
    }
}

impl Serialize for MealDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PairMap(&self.days).serialize(serializer)
    }
}

impl Serialize for MenuDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.weeks.len()))?;
        for week in &self.weeks {
            map.serialize_entry(&week.label, &PairMap(&week.meals))?;
        }
        map.end()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(text: &str) -> Item {
        Item::Leaf(text.to_string())
    }

    #[test]
    fn station_collision_is_last_write_wins() {
        let mut day = DayStations::default();
        day.set("Unknown Station".to_string(), vec![leaf("first")]);
        day.set("Grill".to_string(), vec![leaf("Burger")]);
        day.set("Unknown Station".to_string(), vec![leaf("second")]);

        assert_eq!(day.stations.len(), 2);
        // position of the first write is kept, content of the second wins
        assert_eq!(day.stations[0].0, "Unknown Station");
        assert_eq!(day.get("Unknown Station").unwrap(), &vec![leaf("second")]);
    }

    #[test]
    fn reopening_a_day_resets_its_stations() {
        let mut builder = MenuBuilder::default();
        builder
            .open_day("Week 1", "Lunch", "Monday")
            .set("Grill".to_string(), vec![leaf("Burger")]);
        builder
            .open_day("Week 1", "Lunch", "Monday")
            .set("Soup".to_string(), vec![leaf("Chili")]);

        let doc = builder.finish();
        let day = doc.week("Week 1").unwrap().meal("Lunch").unwrap().day("Monday").unwrap();
        assert!(day.get("Grill").is_none());
        assert!(day.get("Soup").is_some());
    }

    #[test]
    fn builder_preserves_insertion_order() {
        let mut builder = MenuBuilder::default();
        builder.open_day("Week 1", "Breakfast", "Monday");
        builder.open_day("Week 1", "Lunch", "Monday");
        builder.open_day("Week 1", "Breakfast", "Tuesday");
        builder.open_day("Week 2", "Dinner", "Friday");

        let doc = builder.finish();
        assert_eq!(doc.weeks[0].label, "Week 1");
        assert_eq!(doc.weeks[1].label, "Week 2");
        assert_eq!(doc.weeks[0].meal_names(), vec!["Breakfast", "Lunch"]);
        let breakfast = doc.weeks[0].meal("Breakfast").unwrap();
        assert_eq!(breakfast.days[0].0, "Monday");
        assert_eq!(breakfast.days[1].0, "Tuesday");
    }

    #[test]
    fn document_serializes_to_nested_maps() {
        let mut builder = MenuBuilder::default();
        let day = builder.open_day("Week of August 3", "Lunch", "Monday");
        day.set(
            "Grill".to_string(),
            vec![
                leaf("Burger"),
                Item::Category {
                    label: "Sides".to_string(),
                    items: vec![leaf("Fries"), leaf("Chips")],
                },
            ],
        );

        let value = serde_json::to_value(builder.finish()).unwrap();
        assert_eq!(
            value,
            json!({
                "Week of August 3": {
                    "Lunch": {
                        "Monday": {
                            "Grill": ["Burger", { "Sides": ["Fries", "Chips"] }]
                        }
                    }
                }
            })
        );
    }

    #[test]
    fn meal_key_order_survives_serialization() {
        let mut builder = MenuBuilder::default();
        builder.open_day("W", "Dinner", "Monday");
        builder.open_day("W", "Brunch", "Saturday");

        let text = serde_json::to_string(&builder.finish()).unwrap();
        let dinner_at = text.find("Dinner").unwrap();
        let brunch_at = text.find("Brunch").unwrap();
        assert!(dinner_at < brunch_at, "insertion order must reach the JSON text");
    }
}
