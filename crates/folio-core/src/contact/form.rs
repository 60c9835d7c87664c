use thiserror::Error;
use tracing::{error, info, warn};

use super::mailer::{ContactMessage, DeliveryRequest, EmailCollaborator, EmailCredentials};
use super::validate::{is_valid_email, FormField, ValidationError};
use crate::Result;

/// Text typed into the three inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Address as an email input reports it: surrounding whitespace stripped
    pub fn email_value(&self) -> &str {
        self.email.trim()
    }

    /// First problem in field order, if any
    ///
    /// Name and message accept any non-empty text, whitespace included.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for field in FormField::ALL {
            let value = match field {
                FormField::Email => self.email_value(),
                _ => self.get(field),
            };
            if value.is_empty() {
                return Err(ValidationError::Empty(field));
            }
        }
        if !is_valid_email(self.email_value()) {
            return Err(ValidationError::MalformedEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// User-facing outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Message sent successfully!",
            description: "Thank you for your message. I'll get back to you soon.",
        }
    }

    pub fn failure() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Error",
            description: "Failed to send message. Please try again later.",
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A message is already being sent")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Snapshot of the fields taken when a submission starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    fields: ContactMessage,
}

impl Submission {
    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn into_request(self, credentials: EmailCredentials) -> DeliveryRequest {
        DeliveryRequest {
            credentials,
            fields: self.fields,
        }
    }
}

/// Contact form: `Editing -> Submitting -> Editing`
///
/// While `Submitting` the fields are frozen and further submits are
/// rejected, so at most one delivery is in flight per form.
#[derive(Debug, Default)]
pub struct ContactForm {
    state: ContactFormState,
    phase: Phase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ContactFormState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn value(&self, field: FormField) -> &str {
        self.state.get(field)
    }

    /// Mutable access to one field; `None` while submitting
    pub fn field_mut(&mut self, field: FormField) -> Option<&mut String> {
        if self.is_submitting() {
            return None;
        }
        Some(self.state.get_mut(field))
    }

    pub fn set(&mut self, field: FormField, value: &str) {
        if let Some(slot) = self.field_mut(field) {
            *slot = value.to_string();
        }
    }

    pub fn push_char(&mut self, field: FormField, c: char) {
        if let Some(slot) = self.field_mut(field) {
            slot.push(c);
        }
    }

    pub fn pop_char(&mut self, field: FormField) {
        if let Some(slot) = self.field_mut(field) {
            slot.pop();
        }
    }

    /// Validate and move to `Submitting`
    pub fn begin_submit(&mut self) -> std::result::Result<Submission, SubmitRejected> {
        if self.is_submitting() {
            warn!("Submit ignored, a message is already in flight");
            return Err(SubmitRejected::InFlight);
        }
        self.state.validate()?;

        self.phase = Phase::Submitting;
        info!("Sending contact message");
        Ok(Submission {
            fields: ContactMessage {
                name: self.state.name.clone(),
                email: self.state.email_value().to_string(),
                message: self.state.message.clone(),
            },
        })
    }

    /// Settle the in-flight submission with the collaborator's outcome
    ///
    /// Returns `None` and leaves the form untouched when nothing is in flight.
    pub fn finish(&mut self, outcome: Result<()>) -> Option<Notification> {
        if !self.is_submitting() {
            warn!("Delivery outcome arrived with no submission in flight, ignoring it");
            return None;
        }
        Some(self.settle(outcome))
    }

    fn settle(&mut self, outcome: Result<()>) -> Notification {
        self.phase = Phase::Editing;

        match outcome {
            Ok(()) => {
                info!("Contact message sent");
                self.state = ContactFormState::default();
                Notification::success()
            }
            Err(e) => {
                error!("Error sending email: {}", e);
                Notification::failure()
            }
        }
    }

    /// Run a whole submission inline
    pub async fn submit<C>(
        &mut self,
        collaborator: &C,
        credentials: &EmailCredentials,
    ) -> std::result::Result<Notification, SubmitRejected>
    where
        C: EmailCollaborator + ?Sized,
    {
        let request = self.begin_submit()?.into_request(credentials.clone());
        let outcome = collaborator.send_form(&request).await;
        Ok(self.settle(outcome))
    }
}
