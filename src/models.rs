//! Frontend Models
//!
//! Menu items, cart entries and notification kinds.

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// Category sentinel meaning "no filter"
pub const ALL_CATEGORIES: &str = "all";

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
}

impl MenuItem {
    /// Build an item, deriving its id from the title
    pub fn new(title: &str, description: &str, price: Price, image: &str, category: &str) -> Self {
        Self {
            id: slugify(title),
            title: title.to_string(),
            description: description.to_string(),
            price,
            image: image.to_string(),
            category: category.to_string(),
        }
    }
}

/// A menu item in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    pub quantity: u32,
}

impl CartEntry {
    pub fn from_item(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
            category: item.category.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotifyKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotifyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotifyKind::Success => "success",
            NotifyKind::Error => "error",
            NotifyKind::Warning => "warning",
            NotifyKind::Info => "info",
        }
    }
}

/// Lowercase the text, collapse every run of non-alphanumerics into one `-`
/// and trim dashes from both ends
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Caramel Macchiato"), "caramel-macchiato");
        assert_eq!(slugify("  Café  Au Lait!! "), "caf-au-lait");
        assert_eq!(slugify("--Chai -- Latte--"), "chai-latte");
        assert_eq!(slugify("100% Arabica"), "100-arabica");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_near_duplicate_titles_collide() {
        assert_eq!(slugify("Mocha!"), slugify("mocha"));
    }

    #[test]
    fn test_cart_entry_from_item() {
        let item = MenuItem::new("Flat White", "Velvety", Price::from_cents(425), "img/fw.jpg", "coffee");
        let entry = CartEntry::from_item(&item);
        assert_eq!(entry.id, "flat-white");
        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.line_total(), Price::from_cents(425));
    }

    #[test]
    fn test_cart_entry_wire_format() {
        let item = MenuItem::new("Espresso", "Short and strong", Price::from_cents(300), "img/e.jpg", "coffee");
        let json = serde_json::to_value(CartEntry::from_item(&item)).unwrap();
        assert_eq!(json["id"], "espresso");
        assert_eq!(json["price"], "$3.00");
        assert_eq!(json["quantity"], 1);
    }
}
