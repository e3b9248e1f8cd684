use serde::{Deserialize, Serialize};

/// Contact details shown in the contact section and the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// One row of the opening-hours table, e.g. "Monday - Thursday" / "5:00 PM - 10:00 PM".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursEntry {
    pub days: String,
    pub hours: String,
}

/// A social network link in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}
