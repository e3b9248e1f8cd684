//! All static site copy in one place.
//!
//! Sections consume this data through context; nothing here is computed at
//! render time. Menu categories double as the section list for the tab
//! switcher, keyed by `MenuCategory::key`.

use contracts::menu::{MenuCategory, MenuItem};
use contracts::restaurant::{ContactInfo, HoursEntry, SocialLink};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    pub heading: String,
    pub paragraphs: Vec<String>,
    pub stats: Vec<Stat>,
    pub rating_caption: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub tagline: String,
    pub menu: Vec<MenuCategory>,
    pub story: Story,
    pub contact: ContactInfo,
    pub hours: Vec<HoursEntry>,
    pub socials: Vec<SocialLink>,
    /// Reservation form options: seating times as shown in the time select.
    pub reservation_times: Vec<String>,
    /// Reservation form options: (value, label) pairs for the guests select.
    pub guest_options: Vec<(String, String)>,
    pub footer_blurb: String,
}

fn item(name: &str, description: &str, price: &str) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        description: description.to_string(),
        price: price.to_string(),
    }
}

static SITE: Lazy<SiteContent> = Lazy::new(|| SiteContent {
    brand: "Harbor Grill".into(),
    tagline: "Where culinary excellence meets coastal charm. Experience fresh seafood and premium steaks in an elegant waterfront setting.".into(),
    menu: vec![
        MenuCategory {
            key: "appetizers".into(),
            title: "Appetizers".into(),
            items: vec![
                item("Oysters Rockefeller", "Fresh oysters with spinach, herbs, and hollandaise", "$18"),
                item("Lobster Bisque", "Rich and creamy with fresh lobster meat", "$14"),
                item("Seared Scallops", "Pan-seared with cauliflower puree and pancetta", "$22"),
                item("Tuna Tartare", "Yellowfin tuna with avocado and citrus", "$19"),
            ],
        },
        MenuCategory {
            key: "entrees".into(),
            title: "Entrées".into(),
            items: vec![
                item("Grilled Salmon", "Atlantic salmon with lemon herb butter and seasonal vegetables", "$32"),
                item("Ribeye Steak", "28-day aged ribeye with garlic mashed potatoes", "$48"),
                item("Lobster Thermidor", "Whole lobster with cognac cream sauce", "$52"),
                item("Seafood Paella", "Traditional Spanish rice with mixed seafood", "$38"),
                item("Lamb Rack", "Herb-crusted with rosemary jus and roasted vegetables", "$42"),
                item("Halibut", "Pan-roasted with wild mushroom risotto", "$36"),
            ],
        },
        MenuCategory {
            key: "desserts".into(),
            title: "Desserts".into(),
            items: vec![
                item("Chocolate Lava Cake", "Warm chocolate cake with vanilla ice cream", "$12"),
                item("Crème Brûlée", "Classic vanilla custard with caramelized sugar", "$10"),
                item("Key Lime Pie", "Florida key lime with graham cracker crust", "$9"),
                item("Tiramisu", "Traditional Italian coffee-flavored dessert", "$11"),
            ],
        },
    ],
    story: Story {
        heading: "Our Story".into(),
        paragraphs: vec![
            "Founded in 1987 by Chef Marina Rodriguez, Harbor Grill began as a small family restaurant with a simple mission: to serve the freshest seafood and finest steaks in an atmosphere that feels like home.".into(),
            "What started as a 20-seat establishment has grown into one of the city's most beloved dining destinations, but we've never forgotten our roots. Every dish is still prepared with the same passion and attention to detail that Marina brought to her first kitchen.".into(),
            "Today, under the guidance of her daughter Sofia, Harbor Grill continues to evolve while honoring the traditions that made us who we are. We source our seafood daily from local fishermen and age our steaks to perfection, ensuring every meal is an unforgettable experience.".into(),
        ],
        stats: vec![
            Stat { value: "35+".into(), label: "Years of Excellence".into() },
            Stat { value: "50k+".into(), label: "Happy Guests".into() },
            Stat { value: "15".into(), label: "Awards Won".into() },
        ],
        rating_caption: "Michelin Recommended".into(),
    },
    contact: ContactInfo {
        phone: "(555) 123-4567".into(),
        email: "info@harborgrill.com".into(),
        address: "123 Harbor Drive, Coastal City, CA 90210".into(),
    },
    hours: vec![
        HoursEntry { days: "Monday - Thursday".into(), hours: "5:00 PM - 10:00 PM".into() },
        HoursEntry { days: "Friday - Saturday".into(), hours: "5:00 PM - 11:00 PM".into() },
        HoursEntry { days: "Sunday".into(), hours: "4:00 PM - 9:00 PM".into() },
    ],
    socials: vec![
        SocialLink { label: "Facebook".into(), url: "#".into() },
        SocialLink { label: "Instagram".into(), url: "#".into() },
        SocialLink { label: "Twitter".into(), url: "#".into() },
    ],
    reservation_times: [
        "5:00 PM", "5:30 PM", "6:00 PM", "6:30 PM", "7:00 PM", "7:30 PM",
        "8:00 PM", "8:30 PM", "9:00 PM",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect(),
    guest_options: vec![
        ("1".into(), "1 Guest".into()),
        ("2".into(), "2 Guests".into()),
        ("3".into(), "3 Guests".into()),
        ("4".into(), "4 Guests".into()),
        ("5".into(), "5 Guests".into()),
        ("6".into(), "6+ Guests".into()),
    ],
    footer_blurb: "Where culinary excellence meets coastal charm. Experience unforgettable dining.".into(),
});

pub fn site() -> &'static SiteContent {
    &SITE
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::menu::category_by_key;

    #[test]
    fn test_menu_keys_are_unique() {
        let menu = &site().menu;
        for category in menu {
            let count = menu.iter().filter(|c| c.key == category.key).count();
            assert_eq!(count, 1, "duplicate menu key {}", category.key);
        }
    }

    #[test]
    fn test_default_category_exists() {
        assert!(category_by_key(&site().menu, "appetizers").is_some());
    }

    #[test]
    fn test_every_category_has_items() {
        for category in &site().menu {
            assert!(!category.items.is_empty(), "{} is empty", category.key);
        }
    }
}
