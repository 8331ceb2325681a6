use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::debug;
use thiserror::Error;

use super::draft::{BookingDraft, Field};
use super::summary::compose_message;
use super::validation::{validate_field, validate_fields, ValidationError, ALL_FIELDS};
use crate::handoff;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Details = 1,
    ServiceInfo = 2,
    Schedule = 3,
    Location = 4,
    Review = 5,
}

impl Step {
    pub const COUNT: u8 = 5;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Details => "Your Details",
            Step::ServiceInfo => "Service & AC Details",
            Step::Schedule => "Preferred Date & Time",
            Step::Location => "Address & Area",
            Step::Review => "Review & Submit",
        }
    }

    /// Fields that must hold valid values before leaving this step forwards.
    pub fn gated_fields(self) -> &'static [Field] {
        match self {
            Step::Details => &[Field::Name, Field::Phone],
            Step::ServiceInfo => &[Field::Service],
            Step::Schedule => &[Field::PreferredDate],
            Step::Location => &[Field::Address],
            Step::Review => &[],
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::Details => Some(Step::ServiceInfo),
            Step::ServiceInfo => Some(Step::Schedule),
            Step::Schedule => Some(Step::Location),
            Step::Location => Some(Step::Review),
            Step::Review => None,
        }
    }

    fn previous(self) -> Option<Step> {
        match self {
            Step::Details => None,
            Step::ServiceInfo => Some(Step::Details),
            Step::Schedule => Some(Step::ServiceInfo),
            Step::Location => Some(Step::Schedule),
            Step::Review => Some(Step::Location),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing,
    /// The hand-off link is built and waiting for the spinner delay to elapse.
    Submitting { handoff_url: String },
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<ValidationError>),
    #[error("{0}")]
    NotPermitted(&'static str),
}

/// The multi-step booking form: current step, draft, inline errors and
/// submission phase. Every transition is a plain method so it can be driven
/// without a browser.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingFlow {
    step: Step,
    phase: Phase,
    draft: BookingDraft,
    errors: BTreeMap<Field, ValidationError>,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFlow {
    pub fn new() -> Self {
        Self {
            step: Step::Details,
            phase: Phase::Editing,
            draft: BookingDraft::default(),
            errors: BTreeMap::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Whether the three required fields currently hold valid values.
    pub fn can_submit(&self, today: NaiveDate) -> bool {
        validate_fields(&self.draft, &[Field::Name, Field::Phone, Field::Service], today).is_ok()
    }

    /// Stores a new value and re-validates just that field.
    pub fn update_field(&mut self, field: Field, raw: &str, today: NaiveDate) {
        if self.phase != Phase::Editing {
            return;
        }
        self.draft.set(field, raw);
        match validate_field(&self.draft, field, today) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(error) => {
                self.errors.insert(field, error);
            }
        }
    }

    pub fn advance(&mut self, today: NaiveDate) -> Result<Step, FlowError> {
        self.ensure_editing()?;
        let next = self
            .step
            .next()
            .ok_or(FlowError::NotPermitted("already on the review step"))?;
        self.check(self.step.gated_fields(), today)?;
        debug!("booking step {} -> {}", self.step.number(), next.number());
        self.step = next;
        Ok(next)
    }

    /// Goes back one step. Entered values are kept.
    pub fn retreat(&mut self) -> Result<Step, FlowError> {
        self.ensure_editing()?;
        let previous = self
            .step
            .previous()
            .ok_or(FlowError::NotPermitted("already on the first step"))?;
        debug!("booking step {} -> {}", self.step.number(), previous.number());
        self.step = previous;
        Ok(previous)
    }

    /// Validates the whole draft and builds the hand-off link. The flow waits
    /// in `Submitting` until `complete_handoff` is called.
    pub fn submit(&mut self, today: NaiveDate) -> Result<String, FlowError> {
        self.ensure_editing()?;
        if self.step != Step::Review {
            return Err(FlowError::NotPermitted("bookings are sent from the review step"));
        }
        self.check(ALL_FIELDS, today)?;
        let handoff_url = handoff::whatsapp_link(&compose_message(&self.draft));
        self.phase = Phase::Submitting {
            handoff_url: handoff_url.clone(),
        };
        Ok(handoff_url)
    }

    pub fn complete_handoff(&mut self) -> Result<(), FlowError> {
        match self.phase {
            Phase::Submitting { .. } => {
                self.phase = Phase::Submitted;
                Ok(())
            }
            _ => Err(FlowError::NotPermitted("no booking is being sent")),
        }
    }

    /// Discards the draft after a successful booking.
    pub fn reset(&mut self) -> Result<(), FlowError> {
        if self.phase != Phase::Submitted {
            return Err(FlowError::NotPermitted("nothing to reset before a booking is sent"));
        }
        *self = Self::new();
        Ok(())
    }

    fn ensure_editing(&self) -> Result<(), FlowError> {
        if self.phase == Phase::Editing {
            Ok(())
        } else {
            Err(FlowError::NotPermitted("the booking has already been sent"))
        }
    }

    /// Re-validates `fields`, refreshing their inline annotations. Annotations
    /// on other fields are left alone.
    fn check(&mut self, fields: &[Field], today: NaiveDate) -> Result<(), FlowError> {
        for field in fields {
            self.errors.remove(field);
        }
        validate_fields(&self.draft, fields, today).map_err(|errors| {
            for error in &errors {
                self.errors.insert(error.field, error.clone());
            }
            FlowError::Invalid(errors)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::validation::{ADDRESS_MAX_CHARS, NOTES_MAX_CHARS};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn fill(flow: &mut BookingFlow, values: &[(Field, &str)]) {
        for (field, value) in values {
            flow.update_field(*field, value, today());
        }
    }

    fn at_review() -> BookingFlow {
        let mut flow = BookingFlow::new();
        fill(
            &mut flow,
            &[
                (Field::Name, "Amit Desai"),
                (Field::Phone, "+919876543210"),
                (Field::Service, "AC Repair"),
            ],
        );
        for _ in 0..4 {
            flow.advance(today()).unwrap();
        }
        assert_eq!(flow.step(), Step::Review);
        flow
    }

    #[test]
    fn invalid_details_keep_the_first_step() {
        let mut flow = BookingFlow::new();
        fill(&mut flow, &[(Field::Name, "R2D2"), (Field::Phone, "12345")]);

        match flow.advance(today()) {
            Err(FlowError::Invalid(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(flow.step(), Step::Details);
        assert!(flow.error_for(Field::Name).is_some());
        assert!(flow.error_for(Field::Phone).is_some());
    }

    #[test]
    fn advancing_untouched_form_annotates_required_fields() {
        let mut flow = BookingFlow::new();
        assert!(flow.advance(today()).is_err());
        assert_eq!(
            flow.error_for(Field::Name).map(|e| e.message.as_str()),
            Some("Please enter your name")
        );
        assert_eq!(flow.step(), Step::Details);
    }

    #[test]
    fn two_valid_steps_reach_the_schedule() {
        let mut flow = BookingFlow::new();
        fill(&mut flow, &[(Field::Name, "Rajesh Kumar"), (Field::Phone, "9876543210")]);
        assert_eq!(flow.advance(today()), Ok(Step::ServiceInfo));
        fill(&mut flow, &[(Field::Service, "Gas Refill")]);
        assert_eq!(flow.advance(today()), Ok(Step::Schedule));
    }

    #[test]
    fn missing_service_blocks_step_two() {
        let mut flow = BookingFlow::new();
        fill(&mut flow, &[(Field::Name, "Rajesh Kumar"), (Field::Phone, "9876543210")]);
        flow.advance(today()).unwrap();
        assert!(flow.advance(today()).is_err());
        assert_eq!(flow.step(), Step::ServiceInfo);
        assert_eq!(
            flow.error_for(Field::Service).map(|e| e.message.as_str()),
            Some("Please select a service")
        );
    }

    #[test]
    fn past_date_blocks_the_schedule_step_only_when_set() {
        let mut flow = at_review();
        flow.retreat().unwrap();
        flow.retreat().unwrap();
        assert_eq!(flow.step(), Step::Schedule);

        flow.update_field(Field::PreferredDate, "2026-10-16", today());
        assert!(flow.error_for(Field::PreferredDate).is_some());
        assert!(flow.advance(today()).is_err());
        assert_eq!(flow.step(), Step::Schedule);

        flow.update_field(Field::PreferredDate, "", today());
        assert!(flow.error_for(Field::PreferredDate).is_none());
        assert_eq!(flow.advance(today()), Ok(Step::Location));
    }

    #[test]
    fn long_address_blocks_the_location_step() {
        let mut flow = at_review();
        flow.retreat().unwrap();
        assert_eq!(flow.step(), Step::Location);

        let long_address = "x".repeat(ADDRESS_MAX_CHARS + 1);
        fill(&mut flow, &[(Field::Address, long_address.as_str())]);
        match flow.advance(today()) {
            Err(FlowError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::Address);
                assert_eq!(errors[0].message, "Address is too long");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(flow.step(), Step::Location);

        fill(&mut flow, &[(Field::Address, "Flat 4, Green Park")]);
        assert_eq!(flow.advance(today()), Ok(Step::Review));
    }

    #[test]
    fn long_notes_block_submission() {
        let mut flow = at_review();
        let long_notes = "y".repeat(NOTES_MAX_CHARS + 1);
        fill(&mut flow, &[(Field::Notes, long_notes.as_str())]);
        match flow.submit(today()) {
            Err(FlowError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::Notes);
                assert_eq!(errors[0].message, "Message is too long");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(flow.phase(), &Phase::Editing);
        assert_eq!(flow.step(), Step::Review);
    }

    #[test]
    fn retreat_steps_back_once_and_keeps_values() {
        let mut flow = at_review();
        fill(&mut flow, &[(Field::Notes, "Second floor")]);
        let before = flow.draft().clone();

        for expected in [Step::Location, Step::Schedule, Step::ServiceInfo, Step::Details] {
            assert_eq!(flow.retreat(), Ok(expected));
            assert_eq!(flow.draft(), &before);
        }
        assert!(matches!(flow.retreat(), Err(FlowError::NotPermitted(_))));
        assert_eq!(flow.step(), Step::Details);
    }

    #[test]
    fn advance_on_review_is_refused() {
        let mut flow = at_review();
        assert!(matches!(flow.advance(today()), Err(FlowError::NotPermitted(_))));
        assert_eq!(flow.step(), Step::Review);
    }

    #[test]
    fn submit_only_from_review() {
        let mut flow = BookingFlow::new();
        fill(
            &mut flow,
            &[
                (Field::Name, "Amit Desai"),
                (Field::Phone, "9876543210"),
                (Field::Service, "AC Repair"),
            ],
        );
        assert!(flow.can_submit(today()));
        assert!(matches!(flow.submit(today()), Err(FlowError::NotPermitted(_))));
        assert_eq!(flow.phase(), &Phase::Editing);
    }

    #[test]
    fn submit_builds_handoff_and_completes() {
        let mut flow = at_review();
        let url = flow.submit(today()).unwrap();
        assert!(url.starts_with("https://wa.me/917745046520?text="));
        assert!(url.contains("Notes%3A%20None"));
        assert_eq!(
            flow.phase(),
            &Phase::Submitting {
                handoff_url: url.clone()
            }
        );

        // Edits are ignored while the hand-off is pending.
        flow.update_field(Field::Name, "Someone Else", today());
        assert_eq!(flow.draft().name, "Amit Desai");

        flow.complete_handoff().unwrap();
        assert_eq!(flow.phase(), &Phase::Submitted);
    }

    #[test]
    fn submit_revalidates_required_fields() {
        let mut flow = at_review();
        flow.update_field(Field::Phone, "0000", today());
        match flow.submit(today()) {
            Err(FlowError::Invalid(errors)) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, Field::Phone);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(flow.phase(), &Phase::Editing);
        assert_eq!(flow.draft().name, "Amit Desai");
    }

    #[test]
    fn reset_only_after_submission() {
        let mut flow = at_review();
        assert!(flow.reset().is_err());
        flow.submit(today()).unwrap();
        assert!(flow.reset().is_err());
        flow.complete_handoff().unwrap();
        flow.reset().unwrap();
        assert_eq!(flow, BookingFlow::new());
    }
}
