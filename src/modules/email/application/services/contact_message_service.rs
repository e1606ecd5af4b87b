use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;
use maud::html;
use tracing::{info, warn};

use crate::email::application::ports::incoming::send_contact_message::{
    ContactMessage, SendContactMessageError, SendContactMessageUseCase,
};
use crate::email::application::ports::outgoing::email_sender::{EmailSender, OutgoingEmail};

pub const MAX_MESSAGE_CHARS: usize = 5000;
const MAX_NAME_CHARS: usize = 200;

/// Forwards visitor messages from the public contact form to the gallery
/// inbox. The visitor address goes into `Reply-To`, never `From`.
pub struct ContactMessageService {
    sender: Arc<dyn EmailSender>,
    recipient: String,
}

impl ContactMessageService {
    pub fn new(sender: Arc<dyn EmailSender>, recipient: impl Into<String>) -> Self {
        Self {
            sender,
            recipient: recipient.into(),
        }
    }
}

fn validate(message: ContactMessage) -> Result<ContactMessage, String> {
    let name = message.name.trim().to_string();
    let email = message.email.trim().to_string();
    let text = message.message.trim().to_string();

    if name.is_empty() {
        return Err("Name is required".to_string());
    }
    if name.chars().count() > MAX_NAME_CHARS {
        return Err(format!("Name must be at most {} characters", MAX_NAME_CHARS));
    }
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    if !EmailAddress::is_valid(&email) {
        return Err("Email address is not valid".to_string());
    }
    if text.is_empty() {
        return Err("Message is required".to_string());
    }
    if text.chars().count() > MAX_MESSAGE_CHARS {
        return Err(format!(
            "Message must be at most {} characters",
            MAX_MESSAGE_CHARS
        ));
    }

    Ok(ContactMessage {
        name,
        email,
        message: text,
    })
}

/// Every visitor-supplied value is escaped by the template.
fn render_body(message: &ContactMessage) -> String {
    html! {
        h2 { "Nova poruka sa sajta" }
        p {
            strong { "Ime: " } (message.name)
            br;
            strong { "Email: " } (message.email)
        }
        @for line in message.message.lines() {
            p { (line) }
        }
    }
    .into_string()
}

#[async_trait]
impl SendContactMessageUseCase for ContactMessageService {
    async fn execute(&self, message: ContactMessage) -> Result<(), SendContactMessageError> {
        let message = validate(message).map_err(SendContactMessageError::Validation)?;

        let email = OutgoingEmail {
            to: self.recipient.clone(),
            reply_to: Some(message.email.clone()),
            subject: format!("Kontakt forma: {}", message.name),
            html_body: render_body(&message),
        };

        self.sender.send(email).await.map_err(|e| {
            warn!("Contact message could not be delivered: {}", e);
            SendContactMessageError::DeliveryFailed(e.to_string())
        })?;

        info!("Contact message forwarded");
        Ok(())
    }
}
