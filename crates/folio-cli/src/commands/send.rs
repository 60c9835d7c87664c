use anyhow::{bail, Result};
use tracing::warn;

use folio_core::contact::{ContactForm, EmailJsClient, FormField};
use folio_core::AppConfig;

pub async fn run(config: &AppConfig, name: &str, email: &str, message: &str) -> Result<()> {
    let credentials = config.emailjs.credentials();
    if !credentials.is_complete() {
        warn!("EmailJS credentials are incomplete; the service will likely reject the message");
    }
    let client = EmailJsClient::from_config(&config.emailjs)?;

    let mut form = ContactForm::new();
    form.set(FormField::Name, name);
    form.set(FormField::Email, email);
    form.set(FormField::Message, message);

    let notification = form.submit(&client, &credentials).await?;
    println!("{}", notification.title);
    println!("{}", notification.description);

    if !notification.is_success() {
        bail!("message was not delivered");
    }
    Ok(())
}
