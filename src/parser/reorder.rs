use super::model::MenuDocument;

/// Rebuild each week's meal sequence as [Brunch, Dinner, rest in original
/// relative order] whenever both are present. Meal content is untouched.
/// Callers apply this only for halls with a configured brunch day.
pub fn brunch_before_dinner(menu: &mut MenuDocument) {
    for week in &mut menu.weeks {
        let names = week.meal_names();
        if !names.contains(&"Brunch") || !names.contains(&"Dinner") {
            continue;
        }

        let mut brunch = None;
        let mut dinner = None;
        let mut rest = Vec::with_capacity(week.meals.len());
        for pair in std::mem::take(&mut week.meals) {
            match pair.0.as_str() {
                "Brunch" => brunch = Some(pair),
                "Dinner" => dinner = Some(pair),
                _ => rest.push(pair),
            }
        }
        week.meals.extend(brunch);
        week.meals.extend(dinner);
        week.meals.extend(rest);
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::model::MenuBuilder;

    fn document(weeks: &[(&str, &[&str])]) -> MenuDocument {
        let mut builder = MenuBuilder::default();
        for (week, meals) in weeks {
            for meal in *meals {
                builder.open_day(week, meal, "Saturday");
            }
        }
        builder.finish()
    }

    #[test]
    fn brunch_moves_ahead_of_dinner() {
        let mut doc = document(&[("W1", &["Breakfast", "Dinner", "Brunch", "Late Night"])]);
        brunch_before_dinner(&mut doc);
        assert_eq!(
            doc.weeks[0].meal_names(),
            vec!["Brunch", "Dinner", "Breakfast", "Late Night"]
        );
    }

    #[test]
    fn weeks_reorder_independently() {
        let mut doc = document(&[
            ("W1", &["Dinner", "Brunch"]),
            ("W2", &["Breakfast", "Lunch"]),
        ]);
        brunch_before_dinner(&mut doc);
        assert_eq!(doc.weeks[0].meal_names(), vec!["Brunch", "Dinner"]);
        assert_eq!(doc.weeks[1].meal_names(), vec!["Breakfast", "Lunch"]);
    }

    #[test]
    fn noop_without_both_meals() {
        let mut doc = document(&[("W1", &["Dinner", "Lunch"])]);
        brunch_before_dinner(&mut doc);
        assert_eq!(doc.weeks[0].meal_names(), vec!["Dinner", "Lunch"]);

        let mut doc = document(&[("W1", &["Brunch"])]);
        brunch_before_dinner(&mut doc);
        assert_eq!(doc.weeks[0].meal_names(), vec!["Brunch"]);
    }

    #[test]
    fn content_is_untouched() {
        let mut doc = document(&[("W1", &["Dinner", "Brunch"])]);
        let dinner_before = doc.weeks[0].meal("Dinner").unwrap().clone();
        brunch_before_dinner(&mut doc);
        assert_eq!(doc.weeks[0].meal("Dinner").unwrap(), &dinner_before);
    }
}
