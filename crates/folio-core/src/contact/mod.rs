//! Contact form submission flow and the email delivery collaborator

pub mod form;
pub mod mailer;
pub mod validate;

pub use form::{
    ContactForm, ContactFormState, Notification, NotificationKind, Phase, SubmitRejected, Submission,
};
pub use mailer::{ContactMessage, DeliveryRequest, EmailCollaborator, EmailCredentials, EmailJsClient};
pub use validate::{is_valid_email, FormField, ValidationError};
