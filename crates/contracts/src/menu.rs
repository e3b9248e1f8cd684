use serde::{Deserialize, Serialize};

/// One dish as displayed on a menu card.
///
/// All fields are display strings supplied by the content layer; nothing is
/// computed (prices are pre-formatted, e.g. "$18").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
}

/// A named group of dishes selectable via the menu tabs.
///
/// `key` identifies the category to the tab switcher ("appetizers",
/// "entrees", ...); `title` is what the trigger button shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub key: String,
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Looks up a category by its key. Keys are unique by construction of the
/// content data; the first match wins if a caller violates that.
pub fn category_by_key<'a>(categories: &'a [MenuCategory], key: &str) -> Option<&'a MenuCategory> {
    categories.iter().find(|c| c.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MenuCategory> {
        vec![
            MenuCategory {
                key: "appetizers".into(),
                title: "Appetizers".into(),
                items: vec![MenuItem {
                    name: "Lobster Bisque".into(),
                    description: "Rich and creamy".into(),
                    price: "$14".into(),
                }],
            },
            MenuCategory {
                key: "desserts".into(),
                title: "Desserts".into(),
                items: vec![],
            },
        ]
    }

    #[test]
    fn test_category_lookup() {
        let categories = sample();
        assert_eq!(
            category_by_key(&categories, "desserts").map(|c| c.title.as_str()),
            Some("Desserts")
        );
        assert!(category_by_key(&categories, "entrees").is_none());
    }

    #[test]
    fn test_category_lookup_is_exact() {
        let categories = sample();
        assert!(category_by_key(&categories, "Appetizers").is_none());
        assert!(category_by_key(&categories, "").is_none());
    }
}
