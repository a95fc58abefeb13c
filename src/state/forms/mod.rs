//! Form domain layer
//!
//! Field masks, field validators and the submission controller for the
//! address form. Nothing in here knows about the terminal.

mod controller;
mod field;
mod formatters;
mod notify;
mod validators;

pub use controller::{SubmissionController, SubmissionResult};
pub use field::{FieldName, FormField};
pub use notify::{AddressSink, LogSink, Notification, Notifier};

#[cfg(test)]
pub use notify::{MockAddressSink, MockNotifier};
