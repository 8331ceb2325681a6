use super::draft::{BookingDraft, Field};

const NOT_SPECIFIED: &str = "Not specified";
const NO_NOTES: &str = "None";

/// Plain-text booking message sent through the WhatsApp hand-off.
pub fn compose_message(draft: &BookingDraft) -> String {
    let date = draft
        .preferred_date
        .map(|date| date.format("%d-%b-%Y").to_string());

    let lines = [
        (Field::Name, Some(draft.name.clone())),
        (Field::Phone, Some(draft.phone.clone())),
        (Field::Service, draft.service.map(|s| s.label().to_string())),
        (Field::AcType, draft.ac_type.map(|t| t.label().to_string())),
        (Field::PreferredDate, date),
        (Field::TimeSlot, draft.time_slot.map(|t| t.label().to_string())),
        (Field::Area, draft.area.map(|a| a.label().to_string())),
        (Field::Address, non_empty(&draft.address)),
        (Field::Notes, non_empty(&draft.notes)),
    ];

    let mut message = String::from("🔧 New Service Booking\n\n");
    let body: Vec<String> = lines
        .into_iter()
        .map(|(field, value)| {
            let fallback = if field == Field::Notes { NO_NOTES } else { NOT_SPECIFIED };
            format!("{}: {}", field.label(), value.unwrap_or_else(|| fallback.to_string()))
        })
        .collect();
    message.push_str(&body.join("\n"));
    message
}

/// Label/value pairs for the review step. Optional fields only appear once set.
pub fn review_rows(draft: &BookingDraft) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        (Field::Name.label(), draft.name.clone()),
        (Field::Phone.label(), draft.phone.clone()),
        (
            Field::Service.label(),
            draft.service.map(|s| s.label().to_string()).unwrap_or_default(),
        ),
    ];
    if let Some(ac_type) = draft.ac_type {
        rows.push((Field::AcType.label(), ac_type.label().to_string()));
    }
    if let Some(date) = draft.preferred_date {
        rows.push((Field::PreferredDate.label(), date.format("%d %b %Y").to_string()));
    }
    if let Some(slot) = draft.time_slot {
        rows.push((Field::TimeSlot.label(), slot.label().to_string()));
    }
    if let Some(area) = draft.area {
        rows.push((Field::Area.label(), area.label().to_string()));
    }
    if let Some(address) = non_empty(&draft.address) {
        rows.push((Field::Address.label(), address));
    }
    rows
}

/// Blank text counts as omitted; anything else is sent as typed.
fn non_empty(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::fields::{AcType, Area, Service, TimeSlot};
    use chrono::NaiveDate;

    fn minimal_draft() -> BookingDraft {
        BookingDraft {
            name: "Priya Sharma".into(),
            phone: "9876543210".into(),
            service: Some(Service::DeepCleaning),
            ..BookingDraft::default()
        }
    }

    #[test]
    fn omitted_optionals_use_placeholders() {
        let message = compose_message(&minimal_draft());
        assert_eq!(
            message,
            "🔧 New Service Booking\n\n\
             Name: Priya Sharma\n\
             Phone: 9876543210\n\
             Service: Deep Cleaning\n\
             AC Type: Not specified\n\
             Date: Not specified\n\
             Time: Not specified\n\
             Area: Not specified\n\
             Address: Not specified\n\
             Notes: None"
        );
    }

    #[test]
    fn filled_draft_lists_every_value() {
        let draft = BookingDraft {
            ac_type: Some(AcType::Split),
            preferred_date: NaiveDate::from_ymd_opt(2026, 3, 5),
            time_slot: Some(TimeSlot::Morning),
            area: Some(Area::Wakad),
            address: "Flat 4, Green Park".into(),
            notes: "Gate code 1234".into(),
            ..minimal_draft()
        };
        let message = compose_message(&draft);
        assert!(message.contains("\nAC Type: Split AC\n"));
        assert!(message.contains("\nDate: 05-Mar-2026\n"));
        assert!(message.contains("\nTime: Morning (9-12)\n"));
        assert!(message.contains("\nArea: Wakad\n"));
        assert!(message.contains("\nAddress: Flat 4, Green Park\n"));
        assert!(message.ends_with("\nNotes: Gate code 1234"));
    }

    #[test]
    fn whitespace_only_text_counts_as_omitted() {
        let draft = BookingDraft {
            address: "   ".into(),
            notes: "\n".into(),
            ..minimal_draft()
        };
        let message = compose_message(&draft);
        assert!(message.contains("Address: Not specified"));
        assert!(message.ends_with("Notes: None"));
    }

    #[test]
    fn typed_text_is_sent_untrimmed() {
        let draft = BookingDraft {
            address: "  Flat 4, Green Park ".into(),
            notes: "Call first\n".into(),
            ..minimal_draft()
        };
        let message = compose_message(&draft);
        assert!(message.contains("\nAddress:   Flat 4, Green Park \n"));
        assert!(message.ends_with("\nNotes: Call first\n"));
    }

    #[test]
    fn review_shows_only_set_optionals() {
        let mut draft = minimal_draft();
        assert_eq!(review_rows(&draft).len(), 3);
        draft.preferred_date = NaiveDate::from_ymd_opt(2026, 11, 3);
        let rows = review_rows(&draft);
        assert_eq!(rows.last(), Some(&("Date", "03 Nov 2026".to_string())));
    }
}
