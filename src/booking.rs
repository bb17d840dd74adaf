use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Buy,
    Sell,
    Manage,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [ServiceType::Buy, ServiceType::Sell, ServiceType::Manage];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Buy => "buy",
            ServiceType::Sell => "sell",
            ServiceType::Manage => "manage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::Buy => "Buy",
            ServiceType::Sell => "Sell",
            ServiceType::Manage => "Manage",
        }
    }
}

/// Location choices offered by the dropdown. `Other` reveals a free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Gurgaon,
    Other,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Gurgaon, Location::Other];

    /// Value used by the `<select>` element.
    pub fn value(&self) -> &'static str {
        match self {
            Location::Gurgaon => "Gurgaon",
            Location::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Location::Gurgaon => "Gurgaon",
            Location::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Location::ALL.into_iter().find(|l| l.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Email,
    Phone,
    Query,
    Slot,
    ServiceType,
    CustomLocation,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequiredField::Name => "name",
            RequiredField::Email => "email",
            RequiredField::Phone => "phone",
            RequiredField::Query => "query",
            RequiredField::Slot => "time slot",
            RequiredField::ServiceType => "service type",
            RequiredField::CustomLocation => "location",
        };
        f.write_str(name)
    }
}

/// A single user edit to the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Name(String),
    Email(String),
    Phone(String),
    Query(String),
    ServiceType(ServiceType),
    Location(Location),
    CustomLocation(String),
}

/// Unsaved form data held while the dialog is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub query: String,
    pub service_type: Option<ServiceType>,
    pub location: Location,
    pub custom_location: String,
}

impl BookingDraft {
    /// Returns the draft with `edit` applied. Only the edited field changes.
    pub fn apply(self, edit: DraftEdit) -> Self {
        match edit {
            DraftEdit::Name(name) => Self { name, ..self },
            DraftEdit::Email(email) => Self { email, ..self },
            DraftEdit::Phone(phone) => Self { phone, ..self },
            DraftEdit::Query(query) => Self { query, ..self },
            DraftEdit::ServiceType(service_type) => Self {
                service_type: Some(service_type),
                ..self
            },
            DraftEdit::Location(location) => Self { location, ..self },
            DraftEdit::CustomLocation(custom_location) => Self {
                custom_location,
                ..self
            },
        }
    }

    /// Required fields that are still empty. Email format is not checked.
    pub fn missing_fields(&self, slot_id: Option<&str>) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push(RequiredField::Name);
        }
        if self.email.is_empty() {
            missing.push(RequiredField::Email);
        }
        if self.phone.is_empty() {
            missing.push(RequiredField::Phone);
        }
        if self.query.is_empty() {
            missing.push(RequiredField::Query);
        }
        if slot_id.map_or(true, str::is_empty) {
            missing.push(RequiredField::Slot);
        }
        if self.service_type.is_none() {
            missing.push(RequiredField::ServiceType);
        }
        if self.location == Location::Other && self.custom_location.is_empty() {
            missing.push(RequiredField::CustomLocation);
        }
        missing
    }

    pub fn is_submittable(&self, slot_id: Option<&str>) -> bool {
        self.missing_fields(slot_id).is_empty()
    }

    pub fn effective_location(&self) -> &str {
        match self.location {
            Location::Other => &self.custom_location,
            other => other.value(),
        }
    }

    /// Builds the wire body, or the list of missing fields.
    pub fn to_request(&self, slot_id: Option<&str>) -> Result<BookingRequest, Vec<RequiredField>> {
        let missing = self.missing_fields(slot_id);
        match (self.service_type, slot_id) {
            (Some(service_type), Some(slot_id)) if missing.is_empty() => Ok(BookingRequest {
                name: self.name.clone(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                query: self.query.clone(),
                time_slot_id: slot_id.to_string(),
                service_type,
                location: self.effective_location().to_string(),
            }),
            _ => Err(missing),
        }
    }
}

/// Body of the POST sent to the booking endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub query: String,
    pub time_slot_id: String,
    pub service_type: ServiceType,
    pub location: String,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn asha() -> BookingDraft {
        BookingDraft::default()
            .apply(DraftEdit::Name("Asha".into()))
            .apply(DraftEdit::Email("a@x.com".into()))
            .apply(DraftEdit::Phone("+911234567890".into()))
            .apply(DraftEdit::Query("interested in 2BHK".into()))
            .apply(DraftEdit::ServiceType(ServiceType::Buy))
    }

    #[test]
    fn new_draft_starts_in_gurgaon_with_nothing_selected() {
        let draft = BookingDraft::default();
        assert_eq!(draft.location, Location::Gurgaon);
        assert_eq!(draft.service_type, None);
        assert_eq!(
            draft.missing_fields(None),
            vec![
                RequiredField::Name,
                RequiredField::Email,
                RequiredField::Phone,
                RequiredField::Query,
                RequiredField::Slot,
                RequiredField::ServiceType,
            ]
        );
    }

    #[test]
    fn apply_changes_only_the_edited_field() {
        let before = asha();
        let after = before.clone().apply(DraftEdit::Query("selling a villa".into()));
        assert_eq!(after.query, "selling a villa");
        assert_eq!(after.name, before.name);
        assert_eq!(after.phone, before.phone);
        assert_eq!(after.service_type, before.service_type);
    }

    #[test]
    fn every_single_missing_field_is_reported() {
        let cases = [
            (DraftEdit::Name(String::new()), RequiredField::Name),
            (DraftEdit::Email(String::new()), RequiredField::Email),
            (DraftEdit::Phone(String::new()), RequiredField::Phone),
            (DraftEdit::Query(String::new()), RequiredField::Query),
        ];
        for (edit, field) in cases {
            let draft = asha().apply(edit);
            assert_eq!(draft.missing_fields(Some("slot-42")), vec![field]);
            assert!(draft.to_request(Some("slot-42")).is_err());
        }

        let no_service = BookingDraft {
            service_type: None,
            ..asha()
        };
        assert_eq!(
            no_service.missing_fields(Some("slot-42")),
            vec![RequiredField::ServiceType]
        );

        assert_eq!(asha().missing_fields(None), vec![RequiredField::Slot]);
        assert_eq!(asha().missing_fields(Some("")), vec![RequiredField::Slot]);
    }

    #[test]
    fn other_location_requires_custom_text() {
        let draft = asha().apply(DraftEdit::Location(Location::Other));
        assert_eq!(
            draft.missing_fields(Some("slot-42")),
            vec![RequiredField::CustomLocation]
        );

        let draft = draft.apply(DraftEdit::CustomLocation("Noida".into()));
        assert!(draft.is_submittable(Some("slot-42")));
        assert_eq!(draft.effective_location(), "Noida");
    }

    #[test]
    fn custom_text_is_ignored_unless_other_is_chosen() {
        let draft = asha()
            .apply(DraftEdit::CustomLocation("Noida".into()))
            .apply(DraftEdit::Location(Location::Gurgaon));
        assert_eq!(draft.effective_location(), "Gurgaon");
    }

    #[test]
    fn email_format_is_not_checked() {
        let draft = asha().apply(DraftEdit::Email("not-an-email".into()));
        assert!(draft.is_submittable(Some("slot-42")));
    }

    #[test]
    fn request_body_matches_wire_format() {
        let request = asha().to_request(Some("slot-42")).unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "name": "Asha",
                "email": "a@x.com",
                "phone": "+911234567890",
                "query": "interested in 2BHK",
                "time_slot_id": "slot-42",
                "service_type": "buy",
                "location": "Gurgaon",
            })
        );
    }

    #[test]
    fn request_uses_custom_location_for_other() {
        let request = asha()
            .apply(DraftEdit::Location(Location::Other))
            .apply(DraftEdit::CustomLocation("Noida".into()))
            .to_request(Some("slot-42"))
            .unwrap();
        assert_eq!(request.location, "Noida");
    }

    #[test]
    fn location_select_values_round_trip() {
        assert_eq!(Location::from_value("other"), Some(Location::Other));
        assert_eq!(Location::from_value("Gurgaon"), Some(Location::Gurgaon));
        assert_eq!(Location::from_value("Delhi"), None);
    }
}
