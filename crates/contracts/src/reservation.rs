use serde::{Deserialize, Serialize};

/// Reservation form payload.
///
/// The form is client-side only: the payload is serialized and logged to the
/// console on submit, never sent anywhere. The type still lives in contracts
/// so the logged shape is stable and shared with any future consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    pub date: String,
    pub time: String,
    /// Special requests; the one optional field.
    #[serde(default)]
    pub message: String,
}

impl ReservationRequest {
    /// Names of required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let required: [(&'static str, &str); 6] = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("guests", &self.guests),
            ("date", &self.date),
            ("time", &self.time),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ReservationRequest {
        ReservationRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "(555) 123-4567".into(),
            guests: "2".into(),
            date: "2026-09-01".into(),
            time: "7:00 PM".into(),
            message: String::new(),
        }
    }

    #[test]
    fn test_complete_without_message() {
        assert!(filled().is_complete());
    }

    #[test]
    fn test_missing_fields_in_form_order() {
        let mut req = filled();
        req.email.clear();
        req.time = "   ".into();
        assert_eq!(req.missing_fields(), vec!["email", "time"]);
        assert!(!req.is_complete());
    }

    #[test]
    fn test_default_is_all_missing() {
        assert_eq!(
            ReservationRequest::default().missing_fields(),
            vec!["name", "email", "phone", "guests", "date", "time"]
        );
    }
}
