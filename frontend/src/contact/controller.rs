use std::collections::BTreeMap;

use log::{debug, info};

use crate::contact::handoff::{Handoff, SubmissionMode};
use crate::contact::validate::{validate, Field, FieldError};
use crate::content::Brand;
use crate::locale::Locale;

/// Snapshot of the form taken at submit time. Values are trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation stopped at this field; nothing was sent.
    Rejected(FieldError),
    Accepted(Handoff),
}

/// Owns the per-field error annotations of the contact form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormController {
    mode: SubmissionMode,
    errors: BTreeMap<Field, FieldError>,
    reported: Option<Field>,
    attempts: u32,
}

impl FormController {
    pub fn new(mode: SubmissionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> SubmissionMode {
        self.mode
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Field whose error should be surfaced to the visitor right now.
    pub fn reported(&self) -> Option<Field> {
        self.reported
    }

    /// Number of submit attempts so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Validates name, email and message in that order and stops at the first
    /// failure. Fields that pass lose any earlier annotation. Fields after the
    /// failing one are not validated, and their old annotation is dropped.
    pub fn submit(&mut self, input: &ContactFormInput, brand: &Brand, locale: Locale) -> SubmitOutcome {
        self.attempts = self.attempts.wrapping_add(1);
        for field in Field::ORDER {
            match validate(field, input.value(field)) {
                Ok(()) => {
                    self.errors.remove(&field);
                }
                Err(err) => {
                    debug!("Contact form rejected: {}", err);
                    self.errors.insert(field, err);
                    self.errors.retain(|f, _| *f <= field);
                    self.reported = Some(field);
                    return SubmitOutcome::Rejected(err);
                }
            }
        }

        self.errors.clear();
        self.reported = None;
        info!("Contact form accepted ({:?})", self.mode);
        SubmitOutcome::Accepted(self.mode.handoff(input, brand, locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn brand() -> Brand {
        Brand {
            name: "KickstartKorean".to_string(),
            email: "kickstartkorean@gmail.com".to_string(),
            ..Brand::default()
        }
    }

    fn submit(ctl: &mut FormController, name: &str, email: &str, message: &str) -> SubmitOutcome {
        ctl.submit(&ContactFormInput::new(name, email, message), &brand(), Locale::En)
    }

    #[test]
    fn valid_email_handoff_produces_mailto() {
        let mut ctl = FormController::new(SubmissionMode::EmailHandoff);
        let outcome = submit(&mut ctl, "Jane", "jane@example.com", "Looking for TOPIK prep");

        let href = match outcome {
            SubmitOutcome::Accepted(Handoff::Mailto(href)) => href,
            other => panic!("expected a mailto handoff, got {other:?}"),
        };
        assert!(href.contains("subject=KickstartKorean%20inquiry"));
        assert!(href.contains("Jane%0A"));
        assert!(href.contains("jane%40example.com%0A%0A"));
        assert!(href.ends_with("Looking%20for%20TOPIK%20prep"));
        for field in Field::ORDER {
            assert_eq!(ctl.error(field), None);
        }
        assert!(!ctl.has_errors());
    }

    #[test]
    fn empty_name_stops_before_anything_else() {
        let mut ctl = FormController::new(SubmissionMode::EmailHandoff);
        let outcome = submit(&mut ctl, "", "not-an-email", "");

        assert_eq!(outcome, SubmitOutcome::Rejected(FieldError::EmptyName));
        assert_eq!(ctl.error(Field::Name), Some(FieldError::EmptyName));
        assert_eq!(ctl.error(Field::Email), None);
        assert_eq!(ctl.error(Field::Message), None);
        assert_eq!(ctl.reported(), Some(Field::Name));
    }

    #[test]
    fn bad_email_leaves_name_clean() {
        let mut ctl = FormController::new(SubmissionMode::EmailHandoff);
        let outcome = submit(&mut ctl, "Kim", "not-an-email", "hi");

        assert_eq!(outcome, SubmitOutcome::Rejected(FieldError::InvalidEmail));
        assert_eq!(ctl.error(Field::Name), None);
        assert_eq!(
            ctl.error(Field::Email).map(|e| e.message(Locale::En)),
            Some("Please enter a valid email.")
        );
        assert_eq!(ctl.reported(), Some(Field::Email));
    }

    #[test]
    fn demo_mode_acknowledges_without_mailto() {
        let mut ctl = FormController::new(SubmissionMode::Demo);
        let outcome = submit(&mut ctl, "Jane", "jane@example.com", "hello");

        match outcome {
            SubmitOutcome::Accepted(Handoff::Notice(text)) => assert!(text.contains("demo form")),
            other => panic!("expected a notice, got {other:?}"),
        }
    }

    #[test]
    fn fixed_field_precedence() {
        let cases = [
            (("", "", ""), FieldError::EmptyName),
            (("", "jane@example.com", "hi"), FieldError::EmptyName),
            (("Jane", "", ""), FieldError::InvalidEmail),
            (("Jane", "jane@example", ""), FieldError::InvalidEmail),
            (("Jane", "jane@example.com", "   "), FieldError::EmptyMessage),
        ];
        for ((name, email, message), expected) in cases {
            let mut ctl = FormController::new(SubmissionMode::EmailHandoff);
            assert_eq!(
                submit(&mut ctl, name, email, message),
                SubmitOutcome::Rejected(expected)
            );
        }
    }

    #[test]
    fn resubmit_clears_fields_that_became_valid() {
        let mut ctl = FormController::new(SubmissionMode::EmailHandoff);
        submit(&mut ctl, "", "", "");
        assert_eq!(ctl.error(Field::Name), Some(FieldError::EmptyName));

        submit(&mut ctl, "Kim", "kim", "");
        assert_eq!(ctl.error(Field::Name), None);
        assert_eq!(ctl.error(Field::Email), Some(FieldError::InvalidEmail));

        submit(&mut ctl, "Kim", "kim@example.com", "");
        assert_eq!(ctl.error(Field::Email), None);
        assert_eq!(ctl.error(Field::Message), Some(FieldError::EmptyMessage));
        assert_eq!(ctl.reported(), Some(Field::Message));

        let outcome = submit(&mut ctl, "Kim", "kim@example.com", "hi");
        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        assert!(!ctl.has_errors());
        assert_eq!(ctl.reported(), None);
    }

    #[test]
    fn later_fields_drop_stale_errors_when_an_earlier_one_fails() {
        let mut ctl = FormController::new(SubmissionMode::EmailHandoff);
        submit(&mut ctl, "Kim", "bad", "hi");
        assert_eq!(ctl.error(Field::Email), Some(FieldError::InvalidEmail));

        let outcome = submit(&mut ctl, "", "kim@example.com", "hi");
        assert_eq!(outcome, SubmitOutcome::Rejected(FieldError::EmptyName));
        assert_eq!(ctl.error(Field::Name), Some(FieldError::EmptyName));
        assert_eq!(ctl.error(Field::Email), None);
        assert_eq!(ctl.error(Field::Message), None);
    }

    #[test]
    fn every_attempt_is_counted() {
        let mut ctl = FormController::new(SubmissionMode::Demo);
        assert_eq!(ctl.attempts(), 0);
        submit(&mut ctl, "", "", "");
        submit(&mut ctl, "", "", "");
        assert_eq!(ctl.attempts(), 2);
        assert_eq!(ctl.reported(), Some(Field::Name));
        submit(&mut ctl, "Kim", "kim@example.com", "hi");
        assert_eq!(ctl.attempts(), 3);
    }

    #[test]
    fn input_is_trimmed() {
        let input = ContactFormInput::new("  Jane ", " jane@example.com\n", "\thi ");
        assert_eq!(
            input,
            ContactFormInput {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                message: "hi".to_string(),
            }
        );
    }
}
