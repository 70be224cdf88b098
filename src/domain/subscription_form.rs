use serde::Deserialize;
use serde::Serialize;

use super::SubscriberEmail;
use super::ValidationRejected;

/// `Acknowledged` is terminal; nothing moves a form back to `Collecting`. A
/// fresh form (i.e. a new session) starts over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntakeStatus {
    #[default]
    Collecting,
    Acknowledged,
}

/// Returned by a successful `SubscriptionForm::submit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledged;

/// What the join section should show. Unlike `IntakeStatus`, this tells "not
/// submitted yet" and "submitted and rejected" apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView {
    Collecting,
    Rejected(ValidationRejected),
    Acknowledged,
}

/// The email capture form of a single rendering session.
///
/// Serialised into the visitor's session between requests; the submitted
/// address is never kept once the form has been acknowledged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionForm {
    email_input: String,
    status: IntakeStatus,
    last_rejection: Option<ValidationRejected>,
}

impl SubscriptionForm {
    pub fn new() -> Self { Self::default() }

    pub fn email_input(&self) -> &str { &self.email_input }

    pub fn status(&self) -> IntakeStatus { self.status }

    /// Replace the input. No validation happens here.
    pub fn update_input(
        &mut self,
        text: impl Into<String>,
    ) {
        self.email_input = text.into();
        self.last_rejection = None;
    }

    /// Validate the current input and, if it passes, acknowledge the form.
    ///
    /// A rejected submit leaves the form collecting, with the input untouched
    /// so it can be corrected. Submitting an acknowledged form is a no-op that
    /// succeeds again.
    pub fn submit(&mut self) -> Result<Acknowledged, ValidationRejected> {
        if self.status == IntakeStatus::Acknowledged {
            return Ok(Acknowledged);
        }

        match SubscriberEmail::parse(self.email_input.clone()) {
            Ok(_email) => {
                // a mailing list backend would be handed `_email` here
                self.status = IntakeStatus::Acknowledged;
                self.email_input.clear();
                self.last_rejection = None;
                Ok(Acknowledged)
            }
            Err(e) => {
                self.last_rejection = Some(e);
                Err(e)
            }
        }
    }

    pub fn view(&self) -> FormView {
        match (self.status, self.last_rejection) {
            (IntakeStatus::Acknowledged, _) => FormView::Acknowledged,
            (IntakeStatus::Collecting, Some(reason)) => FormView::Rejected(reason),
            (IntakeStatus::Collecting, None) => FormView::Collecting,
        }
    }
}
