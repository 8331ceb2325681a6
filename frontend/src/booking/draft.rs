use std::fmt;

use chrono::NaiveDate;

use super::fields::{AcType, Area, Service, TimeSlot};

/// Format produced by `<input type="date">`.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Service,
    AcType,
    PreferredDate,
    TimeSlot,
    Area,
    Address,
    Notes,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Phone => "Phone",
            Field::Service => "Service",
            Field::AcType => "AC Type",
            Field::PreferredDate => "Date",
            Field::TimeSlot => "Time",
            Field::Area => "Area",
            Field::Address => "Address",
            Field::Notes => "Notes",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values captured for one booking attempt. Lives only as long as the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub service: Option<Service>,
    pub ac_type: Option<AcType>,
    pub preferred_date: Option<NaiveDate>,
    pub time_slot: Option<TimeSlot>,
    pub area: Option<Area>,
    pub address: String,
    pub notes: String,
}

impl BookingDraft {
    /// Stores a raw input value. Choice fields take the option label, the
    /// date takes `YYYY-MM-DD`; anything unrecognised clears the field.
    pub fn set(&mut self, field: Field, raw: &str) {
        match field {
            Field::Name => self.name = raw.to_string(),
            Field::Phone => self.phone = raw.to_string(),
            Field::Service => self.service = Service::from_label(raw),
            Field::AcType => self.ac_type = AcType::from_label(raw),
            Field::PreferredDate => {
                self.preferred_date = NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
            }
            Field::TimeSlot => self.time_slot = TimeSlot::from_label(raw),
            Field::Area => self.area = Area::from_label(raw),
            Field::Address => self.address = raw.to_string(),
            Field::Notes => self.notes = raw.to_string(),
        }
    }

    /// Current value in the shape the matching input element expects.
    pub fn input_value(&self, field: Field) -> String {
        match field {
            Field::Name => self.name.clone(),
            Field::Phone => self.phone.clone(),
            Field::Service => label_or_empty(self.service.map(Service::label)),
            Field::AcType => label_or_empty(self.ac_type.map(AcType::label)),
            Field::PreferredDate => self
                .preferred_date
                .map(|date| date.format(DATE_INPUT_FORMAT).to_string())
                .unwrap_or_default(),
            Field::TimeSlot => label_or_empty(self.time_slot.map(TimeSlot::label)),
            Field::Area => label_or_empty(self.area.map(Area::label)),
            Field::Address => self.address.clone(),
            Field::Notes => self.notes.clone(),
        }
    }
}

fn label_or_empty(label: Option<&'static str>) -> String {
    label.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_fields_parse_labels_and_clear_on_blank() {
        let mut draft = BookingDraft::default();
        draft.set(Field::Service, "Deep Cleaning");
        draft.set(Field::Area, "Viman Nagar");
        assert_eq!(draft.service, Some(Service::DeepCleaning));
        assert_eq!(draft.area, Some(Area::VimanNagar));

        draft.set(Field::Service, "");
        assert_eq!(draft.service, None);
        assert_eq!(draft.input_value(Field::Service), "");
    }

    #[test]
    fn date_input_round_trips_through_input_value() {
        let mut draft = BookingDraft::default();
        draft.set(Field::PreferredDate, "2026-11-03");
        assert_eq!(draft.preferred_date, NaiveDate::from_ymd_opt(2026, 11, 3));
        assert_eq!(draft.input_value(Field::PreferredDate), "2026-11-03");

        draft.set(Field::PreferredDate, "not a date");
        assert_eq!(draft.preferred_date, None);
    }
}
