//! Menu Filter/Search Engine
//!
//! Pure filters over the static catalog plus the fragment mapping used for
//! deep links. Category filtering and text search are separate: whichever
//! was applied last decides the visible set.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{MenuItem, ALL_CATEGORIES};

/// The most recently applied menu filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuQuery {
    Category(String),
    Search(String),
}

impl Default for MenuQuery {
    fn default() -> Self {
        MenuQuery::Category(ALL_CATEGORIES.to_string())
    }
}

/// Menu filter state owned by the UI.
///
/// `generation` changes on every applied filter so the grid can replay its
/// fade-in animation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuView {
    pub query: MenuQuery,
    /// Highlighted filter button
    pub active_category: String,
    pub search_text: String,
    pub generation: u32,
}

impl MenuView {
    pub fn new() -> Self {
        Self { active_category: ALL_CATEGORIES.to_string(), ..Default::default() }
    }

    /// Select a category button. Clears the search box.
    pub fn with_category(&self, category: &str) -> Self {
        Self {
            query: MenuQuery::Category(category.to_string()),
            active_category: category.to_string(),
            search_text: String::new(),
            generation: self.generation.wrapping_add(1),
        }
    }

    /// Apply a text search. The highlighted category is left alone.
    pub fn with_search(&self, text: &str) -> Self {
        Self {
            query: MenuQuery::Search(text.to_string()),
            active_category: self.active_category.clone(),
            search_text: text.to_string(),
            generation: self.generation.wrapping_add(1),
        }
    }

    pub fn visible(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        visible_items(items, &self.query)
    }
}

/// Items in `category`, or all of them for the `"all"` sentinel
pub fn filter_by_category(items: &[MenuItem], category: &str) -> Vec<MenuItem> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .cloned()
        .collect()
}

/// Case-insensitive substring match on title or description
pub fn search(items: &[MenuItem], query: &str) -> Vec<MenuItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

pub fn visible_items(items: &[MenuItem], query: &MenuQuery) -> Vec<MenuItem> {
    match query {
        MenuQuery::Category(category) => filter_by_category(items, category),
        MenuQuery::Search(text) => search(items, text),
    }
}

/// Distinct categories in catalog order, without the sentinel
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.iter().any(|c| c == &item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

// Characters that cannot appear raw in a URL fragment
const FRAGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Fragment to publish for a category; `None` clears it
pub fn fragment_for_category(category: &str) -> Option<String> {
    if category == ALL_CATEGORIES || category.is_empty() {
        None
    } else {
        Some(utf8_percent_encode(category, FRAGMENT_ENCODE_SET).to_string())
    }
}

/// Map a location fragment back to a category that has a filter control
pub fn restore_from_fragment(fragment: &str, available: &[String]) -> Option<String> {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    if raw.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    available.iter().find(|c| c.as_str() == decoded).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn make_item(title: &str, description: &str, category: &str) -> MenuItem {
        MenuItem::new(title, description, Price::from_cents(400), "img.jpg", category)
    }

    fn sample() -> Vec<MenuItem> {
        vec![
            make_item("Espresso", "Rich and bold shot", "coffee"),
            make_item("Green Tea", "Light and grassy", "tea"),
            make_item("Cappuccino", "Espresso with foamed milk", "coffee"),
            make_item("Blueberry Muffin", "Baked fresh every morning", "pastries"),
        ]
    }

    fn titles(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_all_returns_everything_in_order() {
        let items = sample();
        assert_eq!(filter_by_category(&items, ALL_CATEGORIES), items);
    }

    #[test]
    fn test_category_subset() {
        let items = sample();
        let coffee = filter_by_category(&items, "coffee");
        assert_eq!(titles(&coffee), vec!["Espresso", "Cappuccino"]);
        assert!(filter_by_category(&items, "sandwiches").is_empty());
    }

    #[test]
    fn test_empty_search_returns_all() {
        let items = sample();
        assert_eq!(search(&items, ""), items);
        assert_eq!(search(&items, "   "), items);
    }

    #[test]
    fn test_search_case_insensitive_title_or_description() {
        let items = sample();
        assert_eq!(titles(&search(&items, "ESPRESSO")), vec!["Espresso", "Cappuccino"]);
        assert_eq!(titles(&search(&items, "grass")), vec!["Green Tea"]);
        assert!(search(&items, "bagel").is_empty());
    }

    #[test]
    fn test_filters_are_not_composed() {
        let items = sample();
        let query = MenuQuery::Search("fresh".into());
        assert_eq!(titles(&visible_items(&items, &query)), vec!["Blueberry Muffin"]);
        let query = MenuQuery::Category("tea".into());
        assert_eq!(titles(&visible_items(&items, &query)), vec!["Green Tea"]);
    }

    #[test]
    fn test_menu_view_last_filter_wins() {
        let items = sample();
        let view = MenuView::new().with_category("coffee");
        assert_eq!(titles(&view.visible(&items)), vec!["Espresso", "Cappuccino"]);

        // Searching ignores the highlighted category
        let view = view.with_search("muffin");
        assert_eq!(view.active_category, "coffee");
        assert_eq!(titles(&view.visible(&items)), vec!["Blueberry Muffin"]);

        let view = view.with_category(ALL_CATEGORIES);
        assert!(view.search_text.is_empty());
        assert_eq!(view.visible(&items), items);
    }

    #[test]
    fn test_menu_view_generation_advances() {
        let view = MenuView::new();
        let next = view.with_category("tea").with_search("");
        assert_eq!(next.generation, view.generation + 2);
    }

    #[test]
    fn test_menu_view_starts_unfiltered() {
        let items = sample();
        let view = MenuView::new();
        assert_eq!(view.active_category, ALL_CATEGORIES);
        assert_eq!(view.visible(&items), items);
    }

    #[test]
    fn test_categories_distinct_in_order() {
        assert_eq!(categories(&sample()), vec!["coffee", "tea", "pastries"]);
    }

    #[test]
    fn test_fragment_for_category() {
        assert_eq!(fragment_for_category("tea").as_deref(), Some("tea"));
        assert_eq!(fragment_for_category(ALL_CATEGORIES), None);
    }

    #[test]
    fn test_restore_from_fragment() {
        let available = categories(&sample());
        assert_eq!(restore_from_fragment("#tea", &available).as_deref(), Some("tea"));
        assert_eq!(restore_from_fragment("pastries", &available).as_deref(), Some("pastries"));
        assert_eq!(restore_from_fragment("#menu", &available), None);
        assert_eq!(restore_from_fragment("#", &available), None);
        assert_eq!(restore_from_fragment("", &available), None);
    }

    #[test]
    fn test_restore_decodes_fragment() {
        let available = vec!["hot drinks".to_string()];
        let fragment = fragment_for_category("hot drinks").unwrap();
        assert_eq!(fragment, "hot%20drinks");
        assert_eq!(restore_from_fragment(&fragment, &available).as_deref(), Some("hot drinks"));
    }
}
