//! User notifications and the collaborators that receive submit outcomes

use super::controller::{Address, SubmissionResult};

/// Text shown when every field is valid
pub const SUCCESS_MESSAGE: &str = "Endereço cadastrado com sucesso";
/// First line of the combined error report
pub const FAILURE_HEADER: &str = "Erros no formulário:";

/// The single user-facing message produced by a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success,
    /// One `"<label>: <message>"` line per invalid field, in field order
    Failure(Vec<String>),
}

impl Notification {
    pub fn from_result(result: &SubmissionResult) -> Self {
        match result {
            SubmissionResult::Accepted => Notification::Success,
            SubmissionResult::Rejected(failures) => {
                Notification::Failure(failures.iter().map(ToString::to_string).collect())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success)
    }

    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self {
            Notification::Success => "Sucesso",
            Notification::Failure(_) => "Erro",
        }
    }

    /// Full notification text
    pub fn body(&self) -> String {
        match self {
            Notification::Success => SUCCESS_MESSAGE.to_string(),
            Notification::Failure(lines) => {
                let mut body = String::from(FAILURE_HEADER);
                for line in lines {
                    body.push('\n');
                    body.push_str(line);
                }
                body
            }
        }
    }
}

/// Receives the notification produced by each submit attempt
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Receives addresses that passed validation
#[cfg_attr(test, mockall::automock)]
pub trait AddressSink {
    fn accept(&mut self, address: &Address);
}

/// Sink that records accepted addresses in the log
#[derive(Debug, Default)]
pub struct LogSink;

impl AddressSink for LogSink {
    fn accept(&mut self, address: &Address) {
        match serde_json::to_string(address) {
            Ok(json) => tracing::info!(address = %json, "address accepted"),
            Err(err) => tracing::warn!("failed to serialize accepted address: {err}"),
        }
    }
}
