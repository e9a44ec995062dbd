//! Menu Catalog
//!
//! Static list of what the shop sells. Read-only for the session.

use crate::models::MenuItem;
use crate::price::Price;

/// (title, description, cents, image, category)
const ENTRIES: &[(&str, &str, u64, &str, &str)] = &[
    ("Espresso", "A rich, concentrated shot pulled from our house blend.", 300, "images/espresso.jpg", "coffee"),
    ("Cappuccino", "Espresso topped with steamed milk and a thick layer of foam.", 425, "images/cappuccino.jpg", "coffee"),
    ("Caramel Latte", "Smooth espresso, steamed milk and house-made caramel syrup.", 495, "images/caramel-latte.jpg", "coffee"),
    ("Cold Brew", "Steeped for 18 hours for a naturally sweet, low-acid cup.", 450, "images/cold-brew.jpg", "coffee"),
    ("Matcha Latte", "Ceremonial grade matcha whisked with oat milk.", 525, "images/matcha-latte.jpg", "tea"),
    ("Chai Tea", "Black tea simmered with cinnamon, cardamom and ginger.", 400, "images/chai.jpg", "tea"),
    ("Earl Grey", "Classic black tea scented with bergamot.", 350, "images/earl-grey.jpg", "tea"),
    ("Butter Croissant", "Flaky, golden and baked fresh every morning.", 375, "images/croissant.jpg", "pastries"),
    ("Blueberry Muffin", "Packed with blueberries and finished with a crumb topping.", 350, "images/muffin.jpg", "pastries"),
    ("Cinnamon Roll", "Soft swirl of cinnamon dough with cream cheese icing.", 425, "images/cinnamon-roll.jpg", "pastries"),
    ("Avocado Toast", "Sourdough, smashed avocado, chili flakes and lemon.", 850, "images/avocado-toast.jpg", "food"),
    ("Turkey Panini", "Roast turkey, swiss and pesto pressed on ciabatta.", 950, "images/panini.jpg", "food"),
];

/// Catalog items in display order
pub fn menu_items() -> Vec<MenuItem> {
    ENTRIES
        .iter()
        .map(|&(title, description, cents, image, category)| {
            MenuItem::new(title, description, Price::from_cents(cents), image, category)
        })
        .collect()
}

/// Button label for a category token
pub fn category_label(category: &str) -> &str {
    match category {
        "all" => "All",
        "coffee" => "Coffee",
        "tea" => "Tea",
        "pastries" => "Pastries",
        "food" => "Food",
        other => other,
    }
}
