//! Submission controller
//!
//! Owns the four address fields for the lifetime of the form. Input events
//! are routed through the field masks; a submit attempt runs every validator,
//! aggregates the outcomes and emits exactly one notification.
//!
//! The controller is idle between calls. Evaluation happens inside
//! [`SubmissionController::submit`], which holds the controller by `&mut`, so
//! no input can reach the fields until the attempt has finished.

use super::field::{FieldName, FormField};
use super::notify::{AddressSink, Notification, Notifier};
use super::validators::{validate, ValidationFailure};
use serde::Serialize;

/// Aggregate decision of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Accepted,
    /// Failures of the invalid fields only, in field order
    Rejected(Vec<ValidationFailure>),
}

impl SubmissionResult {
    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            SubmissionResult::Accepted => &[],
            SubmissionResult::Rejected(failures) => failures,
        }
    }
}

/// Snapshot of a submitted address, as handed to an [`AddressSink`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub postal_code: String,
    pub street: String,
    pub number: String,
    pub state: String,
}

impl Address {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::PostalCode => &self.postal_code,
            FieldName::Street => &self.street,
            FieldName::Number => &self.number,
            FieldName::State => &self.state,
        }
    }
}

/// The four named slots of the address form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressForm {
    pub postal_code: FormField,
    pub street: FormField,
    pub number: FormField,
    pub state: FormField,
}

impl AddressForm {
    pub fn new() -> Self {
        Self {
            postal_code: FormField::new(FieldName::PostalCode),
            street: FormField::new(FieldName::Street),
            number: FormField::new(FieldName::Number),
            state: FormField::new(FieldName::State),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::PostalCode => &self.postal_code,
            FieldName::Street => &self.street,
            FieldName::Number => &self.number,
            FieldName::State => &self.state,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::PostalCode => &mut self.postal_code,
            FieldName::Street => &mut self.street,
            FieldName::Number => &mut self.number,
            FieldName::State => &mut self.state,
        }
    }

    /// Values as read at submit time
    pub fn snapshot(&self) -> Address {
        Address {
            postal_code: self.postal_code.submitted_value().to_string(),
            street: self.street.submitted_value().to_string(),
            number: self.number.submitted_value().to_string(),
            state: self.state.submitted_value().to_string(),
        }
    }

    pub fn clear(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
    }
}

impl Default for AddressForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Run every validator over the form, in field order, without stopping at
/// the first failure.
pub fn evaluate(form: &AddressForm) -> SubmissionResult {
    evaluate_address(&form.snapshot())
}

/// Validate an address snapshot field by field.
///
/// Takes the values as given, without the input masks, so it also covers
/// values the keyboard path can never produce (e.g. a lowercase state).
pub fn evaluate_address(address: &Address) -> SubmissionResult {
    let failures: Vec<ValidationFailure> = FieldName::ALL
        .into_iter()
        .filter_map(|field| validate(field, address.get(field)).into_failure(field))
        .collect();

    if failures.is_empty() {
        SubmissionResult::Accepted
    } else {
        SubmissionResult::Rejected(failures)
    }
}

#[derive(Debug, Default)]
pub struct SubmissionController {
    form: AddressForm,
    reset_on_success: bool,
}

impl SubmissionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the form after an accepted submission
    pub fn with_reset_on_success(mut self, reset: bool) -> Self {
        self.reset_on_success = reset;
        self
    }

    pub fn form(&self) -> &AddressForm {
        &self.form
    }

    /// Displayed value of `field`
    pub fn value(&self, field: FieldName) -> &str {
        self.form.field(field).as_text()
    }

    /// Field content changed: mask `raw` and store it as the displayed value
    pub fn input(&mut self, field: FieldName, raw: &str) -> &str {
        let value = self.form.field_mut(field).input(raw);
        tracing::debug!(field = %field, value, "field changed");
        value
    }

    pub fn push_char(&mut self, field: FieldName, c: char) -> &str {
        let value = self.form.field_mut(field).push_char(c);
        tracing::debug!(field = %field, value, "field changed");
        value
    }

    pub fn pop_char(&mut self, field: FieldName) -> &str {
        let value = self.form.field_mut(field).pop_char();
        tracing::debug!(field = %field, value, "field changed");
        value
    }

    pub fn reset(&mut self) {
        self.form.clear();
        tracing::debug!("form reset");
    }

    /// Handle a submit request.
    ///
    /// Nothing leaves the form unless every field is valid; the sink only
    /// ever sees accepted addresses. Exactly one notification is emitted.
    pub fn submit(
        &mut self,
        notifier: &mut dyn Notifier,
        sink: &mut dyn AddressSink,
    ) -> SubmissionResult {
        let result = evaluate(&self.form);

        match &result {
            SubmissionResult::Accepted => {
                tracing::info!("address form accepted");
                sink.accept(&self.form.snapshot());
                if self.reset_on_success {
                    self.form.clear();
                }
            }
            SubmissionResult::Rejected(failures) => {
                tracing::info!(errors = failures.len(), "address form rejected");
            }
        }

        notifier.notify(Notification::from_result(&result));
        result
    }
}
